// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::which("tasklist")
//!   .args() .capture_output() .output_encoding(Oem)
//!   .run()    --> tokio::process::Command, wait_with_output
//!             --> ProcessOutput { exit_code, stdout, stderr }
//!   .spawn()  --> inherited stdio, survives the launcher
//!             --> Child
//! ```

pub mod builder;
mod runner;
