// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! OS process control seam.
//!
//! ```text
//! ProcessControl (trait, BoxFuture methods)
//!   kill(image)        -> KillOutcome
//!   is_running(image)  -> bool
//!   launch(command)    -> LaunchedProcess { pid, exit }
//!
//! SystemProcesses
//!   kill        taskkill /F /IM <image>
//!   is_running  tasklist /FO CSV /NH /FI "IMAGENAME eq <image>"
//!               rows:  "VotV-Win64-Shipping.exe","4242","Console","1","1,234 K"
//!               other lines (INFO: ...) mean no match
//!   launch      <program> <args>, inherited stdio, detached
//! ```

use std::fmt;

use anyhow::Context;
use futures_util::future::BoxFuture;
use regex::Regex;
use tracing::debug;

use super::command::GameCommand;
use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{ProcessError, Result, bail_out};
use crate::utility::encoding::Encoding;
use crate::utility::fs::copy::path_exists;

/// Result of a kill attempt that did not fail unexpectedly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillOutcome {
    /// A matching process was terminated.
    Killed,
    /// No matching process was running.
    NotRunning,
}

/// A started game process.
pub struct LaunchedProcess {
    /// OS process id, if the platform reported one.
    pub pid: Option<u32>,
    /// Resolves with the exit code once the process terminates.
    ///
    /// `Ok(None)` means the process ended without an exit code (signal).
    pub exit: BoxFuture<'static, Result<Option<i32>>>,
}

impl fmt::Debug for LaunchedProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaunchedProcess")
            .field("pid", &self.pid)
            .finish_non_exhaustive()
    }
}

/// Operations the workflow needs from the OS process table.
///
/// Implementors must be `Send + Sync`; futures borrow `self` and the
/// arguments for the duration of the call.
pub trait ProcessControl: Send + Sync {
    /// Force-terminates every process with the exact image name.
    fn kill<'a>(&'a self, image: &'a str) -> BoxFuture<'a, Result<KillOutcome>>;

    /// Whether a process with the exact image name is currently listed.
    ///
    /// A query that cannot be performed or understood is an error, never
    /// "not running".
    fn is_running<'a>(&'a self, image: &'a str) -> BoxFuture<'a, Result<bool>>;

    /// Starts the game detached from this program, sharing its console.
    fn launch<'a>(&'a self, command: &'a GameCommand) -> BoxFuture<'a, Result<LaunchedProcess>>;
}

/// [`ProcessControl`] backed by the Windows `taskkill` and `tasklist` tools.
#[derive(Debug, Clone)]
pub struct SystemProcesses {
    taskkill: String,
    tasklist: String,
}

impl Default for SystemProcesses {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemProcesses {
    #[must_use]
    pub fn new() -> Self {
        Self::with_tools("taskkill", "tasklist")
    }

    /// Uses the given programs (names looked up in PATH, or paths) in place
    /// of `taskkill` and `tasklist`. They must accept the same arguments.
    #[must_use]
    pub fn with_tools(taskkill: impl Into<String>, tasklist: impl Into<String>) -> Self {
        Self {
            taskkill: taskkill.into(),
            tasklist: tasklist.into(),
        }
    }

    async fn taskkill(&self, image: &str) -> Result<KillOutcome> {
        let builder = ProcessBuilder::which(&self.taskkill)?
            .args(["/F", "/IM", image])
            .name("taskkill")
            .capture_output()
            .output_encoding(Encoding::Oem)
            .flag(ProcessFlags::ALLOW_FAILURE);
        let command = builder.command_line();
        let output = builder.run().await?;

        if output.success() {
            return Ok(KillOutcome::Killed);
        }

        debug!(
            exit_code = output.exit_code(),
            stderr = %output.stderr().trim(),
            "taskkill reported failure, checking process list"
        );
        if self.tasklist(image).await? {
            Err(ProcessError::NonZeroExit {
                command,
                code: output.exit_code(),
            }
            .into())
        } else {
            Ok(KillOutcome::NotRunning)
        }
    }

    async fn tasklist(&self, image: &str) -> Result<bool> {
        let output = ProcessBuilder::which(&self.tasklist)?
            .args(["/FO", "CSV", "/NH", "/FI"])
            .arg(format!("IMAGENAME eq {image}"))
            .name("tasklist")
            .capture_output()
            .output_encoding(Encoding::Oem)
            .flag(ProcessFlags::ALLOW_FAILURE)
            .run()
            .await?;

        if !output.success() {
            let stderr = output.stderr().trim();
            let message = if stderr.is_empty() {
                format!("tasklist exited with code {}", output.exit_code())
            } else {
                stderr.to_string()
            };
            return Err(ProcessError::QueryFailed { message }.into());
        }

        parse_tasklist_csv(output.stdout(), image)
    }
}

impl ProcessControl for SystemProcesses {
    fn kill<'a>(&'a self, image: &'a str) -> BoxFuture<'a, Result<KillOutcome>> {
        Box::pin(self.taskkill(image))
    }

    fn is_running<'a>(&'a self, image: &'a str) -> BoxFuture<'a, Result<bool>> {
        Box::pin(self.tasklist(image))
    }

    fn launch<'a>(&'a self, command: &'a GameCommand) -> BoxFuture<'a, Result<LaunchedProcess>> {
        Box::pin(async move {
            if !path_exists(command.program()).await {
                return Err(bail_out(format!(
                    "game executable not found: {}",
                    command.program().display()
                ))
                .into());
            }
            let mut child = ProcessBuilder::new(command.program())
                .args(command.args())
                .name("game")
                .inherit_stdio()
                .spawn()?;
            let pid = child.id();
            let exit = Box::pin(async move {
                let status = child.wait().await.context("failed to wait for game")?;
                Ok::<_, anyhow::Error>(status.code())
            });
            Ok(LaunchedProcess { pid, exit })
        })
    }
}

/// Whether `tasklist /FO CSV /NH` output lists a process named `image`.
///
/// Only quoted CSV rows are process entries; the first field is the image
/// name, compared case-insensitively. Anything else, such as the localized
/// "no tasks are running" notice, is ignored.
///
/// # Errors
///
/// Returns an error if the row pattern fails to compile.
pub fn parse_tasklist_csv(stdout: &str, image: &str) -> Result<bool> {
    let row = Regex::new(r#"^"([^"]*)""#).with_context(|| "failed to compile tasklist regex")?;

    Ok(stdout
        .lines()
        .map(str::trim)
        .filter_map(|line| row.captures(line))
        .filter_map(|captures| captures.get(1))
        .any(|name| name.as_str().eq_ignore_ascii_case(image)))
}
