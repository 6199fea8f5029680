// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Game launcher.

use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::command::GameCommand;
use super::control::ProcessControl;
use crate::error::Result;

/// A running game and the task that reports its exit.
#[derive(Debug)]
pub struct GameSession {
    pid: Option<u32>,
    monitor: JoinHandle<Option<i32>>,
}

impl GameSession {
    #[must_use]
    pub const fn pid(&self) -> Option<u32> {
        self.pid
    }

    /// Waits for the game to exit and returns its exit code.
    ///
    /// Dropping the session instead leaves the game running; the exit is
    /// still logged if this program is alive when it happens.
    pub async fn wait(self) -> Option<i32> {
        match self.monitor.await {
            Ok(code) => code,
            Err(e) => {
                warn!(error = %e, "game exit listener stopped");
                None
            }
        }
    }
}

/// Starts the game and registers a listener that logs its exit code.
///
/// Returns as soon as the process is started.
///
/// # Errors
///
/// Returns an error if the game executable cannot be started.
pub async fn launch_game<C>(control: &C, command: &GameCommand) -> Result<GameSession>
where
    C: ProcessControl + ?Sized,
{
    info!(command = %command, "launching game");
    let launched = control.launch(command).await?;
    let pid = launched.pid;
    info!(pid = ?pid, "game started");

    let monitor = tokio::spawn(async move {
        match launched.exit.await {
            Ok(code) => {
                match code {
                    Some(code) => info!(pid = ?pid, exit_code = code, "game exited"),
                    None => info!(pid = ?pid, "game exited without an exit code"),
                }
                code
            }
            Err(e) => {
                error!(pid = ?pid, error = %e, "lost track of game process");
                None
            }
        }
    });

    Ok(GameSession { pid, monitor })
}
