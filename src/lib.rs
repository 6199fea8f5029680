// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            run / list / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  JSON/TOML, layered, env  |
//!              '-----+---------------+-----'
//!                    |               |
//!                    v               v
//!                  game           install
//!          kill, wait, launch   ModEntry, copy
//!                    |               |
//!   +----------------+---------------+--------+
//!   |  core   process (tokio::process, which) |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod install;
pub mod logging;
pub mod utility;
