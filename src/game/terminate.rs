// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process terminator.

use tracing::{info, warn};

use super::control::{KillOutcome, ProcessControl};

/// Force-kills `image` and always completes.
///
/// A process that was not running is logged as a warning; any other kill
/// failure is logged as well and then swallowed. Returns what happened so
/// callers can report it, `None` when the kill command itself failed.
pub async fn terminate_game<C>(control: &C, image: &str) -> Option<KillOutcome>
where
    C: ProcessControl + ?Sized,
{
    match control.kill(image).await {
        Ok(KillOutcome::Killed) => {
            info!(process = %image, "game process terminated");
            Some(KillOutcome::Killed)
        }
        Ok(KillOutcome::NotRunning) => {
            warn!(process = %image, "game process is not running");
            Some(KillOutcome::NotRunning)
        }
        Err(e) => {
            warn!(process = %image, error = %e, "failed to terminate game process");
            None
        }
    }
}
