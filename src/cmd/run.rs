// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The kill, wait, install and launch workflow.
//!
//! ```text
//! START → KILLING → WAITING → INSTALLING(×N) → LAUNCHING → ATTACHED (exit code logged)
//!
//! dry run: KILLING/WAITING/LAUNCHING only log, INSTALLING reports Planned
//! ```

use std::fmt;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::game::{
    GameCommand, GameSession, KillOutcome, ProcessControl, SystemProcesses, launch_game,
    terminate_game, wait_for_exit,
};
use crate::install::{InstallReport, install_all, mod_entries};

/// Workflow phase, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Killing,
    Waiting,
    Installing,
    Launching,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Killing => "killing",
            Self::Waiting => "waiting",
            Self::Installing => "installing",
            Self::Launching => "launching",
        })
    }
}

/// What a workflow run did.
#[derive(Debug)]
pub struct WorkflowReport {
    /// Kill result; `None` if the kill failed or was skipped by a dry run.
    pub kill: Option<KillOutcome>,
    /// Process-list queries made while waiting (0 on a dry run).
    pub polls: u64,
    /// One report per mod entry, in mod list order.
    pub installs: Vec<InstallReport>,
    /// The launched game; `None` on a dry run.
    pub session: Option<GameSession>,
}

/// Runs every phase in order against `control`.
///
/// Returns once the game has been started; it is not waited for.
///
/// # Errors
///
/// Returns an error if waiting times out, a destination directory cannot be
/// created or the game cannot be started.
pub async fn run_workflow<C>(control: &C, config: &Config) -> Result<WorkflowReport>
where
    C: ProcessControl + ?Sized,
{
    let launcher = &config.launcher;
    let dry = config.global.dry;
    let image = launcher.process_name.as_str();

    info!(phase = %Phase::Killing, process = %image, dry, "starting");
    let kill = if dry {
        info!(process = %image, "would kill game process");
        None
    } else {
        terminate_game(control, image).await
    };

    info!(phase = %Phase::Waiting, process = %image, "starting");
    let polls = if dry {
        info!(process = %image, "would wait for game process to exit");
        0
    } else {
        wait_for_exit(
            control,
            image,
            launcher.poll_interval(),
            launcher.wait_timeout(),
        )
        .await?
    };

    let entries = mod_entries(config);
    info!(phase = %Phase::Installing, mods = entries.len(), "starting");
    let installs = install_all(&entries, dry).await?;

    let command = GameCommand::new(&config.paths, launcher);
    info!(phase = %Phase::Launching, "starting");
    let session = if dry {
        info!(command = %command, "would launch game");
        None
    } else {
        Some(launch_game(control, &command).await?)
    };

    Ok(WorkflowReport {
        kill,
        polls,
        installs,
        session,
    })
}

/// Runs the workflow against the real process table.
///
/// # Errors
///
/// Returns any error from [`run_workflow`].
pub async fn run_command(config: &Config) -> Result<()> {
    run_attached(&SystemProcesses::new(), config).await?;
    Ok(())
}

/// Runs the workflow, then stays alive until the launched game exits.
///
/// The exit listener only runs while this program does, so the wait is what
/// gets the game's exit code logged. With `launcher.stay_attached` off this
/// returns right after the launch and yields `None`.
///
/// # Errors
///
/// Returns any error from [`run_workflow`].
pub async fn run_attached<C>(control: &C, config: &Config) -> Result<Option<i32>>
where
    C: ProcessControl + ?Sized,
{
    let report = run_workflow(control, config).await?;

    match report.session {
        Some(session) if config.launcher.stay_attached => {
            info!(pid = ?session.pid(), "waiting for game to exit");
            Ok(session.wait().await)
        }
        _ => Ok(None),
    }
}
