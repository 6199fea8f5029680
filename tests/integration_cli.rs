// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use votv_launcher::cli::global::GlobalOptions;
use votv_launcher::cli::{Cli, Command};

// =============================================================================
// Commands
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["votv-launcher", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["votv-launcher", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_each_command_parses() {
    for (arg, expected) in [
        ("run", "Run"),
        ("list", "List"),
        ("options", "Options"),
        ("inis", "Inis"),
    ] {
        let cli = Cli::try_parse_from(["votv-launcher", arg]).unwrap();
        assert_eq!(format!("{:?}", cli.command), format!("Some({expected})"));
    }
}

#[test]
fn cli_unknown_command_fails() {
    assert!(Cli::try_parse_from(["votv-launcher", "build"]).is_err());
}

// =============================================================================
// Global options
// =============================================================================

#[test]
fn cli_global_options_before_command() {
    let cli = Cli::try_parse_from([
        "votv-launcher",
        "--config",
        "cfg.json",
        "--no-default-inis",
        "--log-file",
        "logs/launcher.log",
        "--file-log-level",
        "6",
        "run",
    ])
    .unwrap();

    assert_eq!(cli.global.config.to_str(), Some("cfg.json"));
    assert!(cli.global.no_default_inis);
    assert_eq!(cli.global.file_log_level, Some(6));
    assert!(cli.global.log_file.is_some());
}

#[test]
fn cli_default_options_have_no_overrides() {
    let global = GlobalOptions::default();

    assert_eq!(global.config.to_str(), Some("config.json"));
    assert_eq!(global.mods.to_str(), Some("mods.json"));
    assert!(global.to_config_overrides().is_empty());
}

#[test]
fn cli_dry_becomes_override() {
    let global = GlobalOptions {
        dry: true,
        options: vec!["launcher.stay_attached=true".to_string()],
        ..GlobalOptions::default()
    };

    insta::assert_debug_snapshot!(global.to_config_overrides(), @r#"
    [
        "launcher.stay_attached=true",
        "global.dry=true",
    ]
    "#);
}
