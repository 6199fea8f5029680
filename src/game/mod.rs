// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Game process control.
//!
//! ```text
//!  terminate_game ──> ProcessControl::kill        taskkill /F /IM <name>
//!        |
//!        v
//!  wait_for_exit  ──> ProcessControl::is_running  tasklist /FO CSV /NH /FI ...
//!        |               (every poll interval, until absent)
//!        v
//!   [ install ]
//!        |
//!        v
//!  launch_game    ──> ProcessControl::launch      "<gameDir>/VotV.exe" [--mod-dir ...]
//!        |
//!        v
//!  GameSession { pid, monitor }   monitor logs the exit code
//! ```
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`GameCommand`] | Program and arguments used to start the game |
//! | [`ProcessControl`] | Kill, query and launch seam, faked in tests |
//! | [`SystemProcesses`] | `taskkill`/`tasklist` backed implementation |
//! | [`GameSession`] | Handle to the launched game and its exit listener |

pub mod command;
pub mod control;
pub mod launch;
pub mod terminate;
pub mod wait;


pub use command::GameCommand;
pub use control::{KillOutcome, LaunchedProcess, ProcessControl, SystemProcesses};
pub use launch::{GameSession, launch_game};
pub use terminate::terminate_game;
pub use wait::wait_for_exit;
