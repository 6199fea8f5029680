// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Encoding, bytes_to_utf8};

#[test]
fn test_utf8_passthrough() {
    let input = "VotV-Win64-Shipping.exe, 世界";
    assert_eq!(bytes_to_utf8(Encoding::Utf8, input.as_bytes()), input);
}

#[test]
fn test_windows_1252_conversion() {
    assert_eq!(bytes_to_utf8(Encoding::Acp, b"caf\xe9"), "café");
}

#[test]
fn test_oem_conversion() {
    // "ИНФО" in CP866
    let input = b"\x88\x8d\x94\x8e";
    assert_eq!(bytes_to_utf8(Encoding::Oem, input), "ИНФО");
}
