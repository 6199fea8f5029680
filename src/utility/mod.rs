// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   bytes_to_utf8()  CP1252/CP866 --> UTF-8
//! fs
//!   copy:  copy_file_async(), ensure_parent_dir(), path_exists()
//! ```

pub mod encoding;
pub mod fs;
