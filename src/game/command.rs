// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Game launch command.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::paths::PathsConfig;
use crate::config::types::LauncherConfig;

/// Shimloader subdirectories passed to the game, in argument order.
const SHIMLOADER_FLAGS: [(&str, &str); 3] = [
    ("--mod-dir", "mod"),
    ("--pak-dir", "pak"),
    ("--cfg-dir", "cfg"),
];

/// Program and arguments that start the game.
///
/// Rendered with [`fmt::Display`] the executable and every directory value
/// are quoted: `"<gameDir>/VotV.exe" --mod-dir "<shim>/mod" ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCommand {
    program: PathBuf,
    args: Vec<String>,
}

impl GameCommand {
    /// Builds the command from the directory roots and launcher options.
    ///
    /// The shimloader flags are only added when `shimloaderDir` is set and
    /// not empty.
    #[must_use]
    pub fn new(paths: &PathsConfig, launcher: &LauncherConfig) -> Self {
        let program = join_forward(paths.game_dir(), &launcher.executable);
        let args = paths
            .shimloader_dir()
            .map(|shim| {
                SHIMLOADER_FLAGS
                    .iter()
                    .flat_map(|(flag, sub)| {
                        [
                            (*flag).to_string(),
                            join_forward(shim, sub).display().to_string(),
                        ]
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self { program, args }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether the shimloader directory flags are part of the command.
    #[must_use]
    pub fn uses_shimloader(&self) -> bool {
        !self.args.is_empty()
    }
}

impl fmt::Display for GameCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.program.display())?;
        for pair in self.args.chunks(2) {
            match pair {
                [flag, value] => write!(f, " {flag} \"{value}\"")?,
                [flag] => write!(f, " {flag}")?,
                _ => {}
            }
        }
        Ok(())
    }
}

/// Joins with `/` the way the configured paths are written, so the command
/// reads the same on every host.
fn join_forward(base: &Path, child: &str) -> PathBuf {
    let base = base.to_string_lossy();
    let base = base.trim_end_matches(['/', '\\']);
    PathBuf::from(format!("{base}/{child}"))
}
