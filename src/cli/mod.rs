// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! votv-launcher [global options] [command]
//! (none) | run   kill, wait, install, launch
//! list           mod entries and the game command
//! options        effective configuration
//! inis           configuration sources
//! version
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Voices of the Void mod installer and launcher
///
/// Stops the game, installs freshly packaged mod paks into the shimloader
/// directory and starts the game again.
#[derive(Debug, Parser)]
#[command(
    name = "votv-launcher",
    author,
    version,
    about = "Voices of the Void mod installer and launcher",
    long_about = "votv-launcher Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Kills VotV-Win64-Shipping.exe, waits for it to exit, copies\n\
                  each configured pakchunk into the shimloader pak directory\n\
                  and launches the game. Invoking `votv-launcher` without a\n\
                  command does all of that.",
    after_help = "CONFIG FILES:\n\n\
                  Directory roots are read from `config.json` (shimloaderDir,\n\
                  gameDir, packagedPaksDir, shimloaderPaksDir) and the mod list\n\
                  from `mods.json` ({\"mods\": [[chunkId, \"ModName\"], ...]}), both\n\
                  in the current directory unless --config/--mods are given.\n\
                  `votv-launcher.toml` in the current directory is loaded on top\n\
                  if present, then every --ini, then VOTV_* environment variables\n\
                  and finally --set options."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Kills the game, installs the mods and launches it again.
    Run,

    /// Lists the mod entries and the game command.
    List,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files in load order.
    Inis,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
