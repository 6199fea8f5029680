// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Settings file (default config.json)
//! --mods FILE       ← Mod list file (default mods.json)
//! --ini FILE        ← Additional config files (can repeat)
//! --dry             ← Log every step without doing it
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > env > --ini > files > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Overlay loaded from the working directory unless `--no-default-inis`.
pub const DEFAULT_OVERLAY: &str = "votv-launcher.toml";

/// Global options available for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalOptions {
    /// Settings file with the directory roots (JSON or TOML).
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        default_value = "config.json"
    )]
    pub config: PathBuf,

    /// Mod list file with the `mods` array (JSON or TOML).
    #[arg(
        short = 'm',
        long = "mods",
        value_name = "FILE",
        default_value = "mods.json"
    )]
    pub mods: PathBuf,

    /// Path to additional INI/TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Logs what would be killed, copied and launched without doing it.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sets an option, such as 'launcher.poll_interval_ms=500' or 'gameDir=D:/VotV'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables auto loading of `votv-launcher.toml`, only uses --ini.
    #[arg(long = "no-default-inis")]
    pub no_default_inis: bool,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            config: PathBuf::from("config.json"),
            mods: PathBuf::from("mods.json"),
            inis: Vec::new(),
            dry: false,
            log_level: None,
            file_log_level: None,
            log_file: None,
            options: Vec::new(),
            no_default_inis: false,
        }
    }
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if self.dry {
            overrides.push("global.dry=true".to_string());
        }

        overrides
    }
}
