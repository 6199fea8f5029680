// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()                              spawn()
//!   build_command()                    build_command()
//!   kill_on_drop(true)                 kill_on_drop(false), inherit stdio
//!   wait_with_output                   return Child
//!   decode stdout/stderr
//!   validate exit_code
//!   (skip if ALLOW_FAILURE)
//!        |
//!        v
//!   ProcessOutput
//! ```

use std::fmt::Write as _;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};
use crate::error::{ProcessError, Result};
use crate::utility::encoding::bytes_to_utf8;

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut cmd = format!("\"{}\"", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Runs the process to completion and returns its decoded output.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if:
    /// - Spawning the child process fails.
    /// - The exit code is not zero and `ALLOW_FAILURE` is not set.
    pub async fn run(self) -> Result<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();
        command.stdin(Stdio::null()).kill_on_drop(true);

        let child = command.spawn().map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line.clone(),
            source,
        })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let raw = child.wait_with_output().await?;

        let output = ProcessOutput::new(
            raw.status.code().unwrap_or(-1),
            bytes_to_utf8(self.encoding(), &raw.stdout).into_owned(),
            bytes_to_utf8(self.encoding(), &raw.stderr).into_owned(),
        );

        if !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) && !output.success() {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr().trim(), "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: output.exit_code(),
            }
            .into());
        }

        trace!(process = %name, exit_code = output.exit_code(), stdout = %output.stdout().trim(), "completed");
        Ok(output)
    }

    /// Starts the process without waiting for it.
    ///
    /// The child shares this console and keeps running when the returned
    /// handle is dropped or this program exits.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::SpawnFailed` if the OS cannot start the program.
    pub fn spawn(self) -> Result<Child> {
        let cmd_line = self.command_line();
        debug!(cmd = %cmd_line, "exec (detached)");

        let mut command = self.build_command();
        command.stdin(Stdio::inherit()).kill_on_drop(false);

        let child = command.spawn().map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line,
            source,
        })?;
        trace!(process = %self.display_name(), pid = ?child.id(), "spawned");
        Ok(child)
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        command.stdout(Self::stdio_from_flags(self.stdout_flags()));
        command.stderr(Self::stdio_from_flags(self.stderr_flags()));
        command
    }

    fn stdio_from_flags(flags: StreamFlags) -> Stdio {
        if flags.contains(StreamFlags::INHERIT) {
            Stdio::inherit()
        } else {
            Stdio::piped()
        }
    }
}
