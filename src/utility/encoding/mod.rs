// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Legacy Windows console encodings.
//!
//! ```text
//! tasklist / taskkill stdout
//!   OEM code page (CP866 on Russian Windows) --(decode)--> UTF-8
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences → U+FFFD.

use encoding_rs::{IBM866, WINDOWS_1252};
use std::borrow::Cow;

/// Encodings console tools write their output in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Treat as UTF-8, replacing invalid sequences.
    #[default]
    Utf8,
    /// Active Code Page, typically Windows-1252.
    Acp,
    /// OEM Code Page used by console programs.
    Oem,
}

/// Converts bytes from the given encoding to UTF-8.
///
/// # Example
/// ```
/// use votv_launcher::utility::encoding::{bytes_to_utf8, Encoding};
///
/// let cp1252_bytes = b"caf\xe9";
/// assert_eq!(bytes_to_utf8(Encoding::Acp, cp1252_bytes), "café");
/// ```
#[must_use]
pub fn bytes_to_utf8(encoding: Encoding, bytes: &[u8]) -> Cow<'_, str> {
    match encoding {
        Encoding::Utf8 => String::from_utf8_lossy(bytes),
        Encoding::Acp => WINDOWS_1252.decode_without_bom_handling(bytes).0,
        Encoding::Oem => IBM866.decode_without_bom_handling(bytes).0,
    }
}

#[cfg(test)]
mod tests;
