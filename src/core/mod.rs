// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core process plumbing.
//!
//! ```text
//!            core
//!             |
//!          process
//!             |
//!   ProcessBuilder --> run()   captured, decoded output
//!                  --> spawn() detached, inherited console
//! ```

pub mod process;
