// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::Path;

#[test]
fn test_parse_no_command_runs_workflow() {
    let cli = Cli::try_parse_from(["votv-launcher"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.global.dry);
    assert!(cli.global.inis.is_empty());
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["votv-launcher", "version"]).unwrap();
    insta::assert_debug_snapshot!(cli.command, @r"
    Some(
        Version,
    )
    ");
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "votv-launcher",
        "-c",
        "settings/config.json",
        "-m",
        "settings/mods.toml",
        "-l",
        "5",
        "--dry",
        "--ini",
        "a.toml",
        "--ini",
        "b.toml",
        "run",
    ])
    .unwrap();

    assert!(matches!(cli.command, Some(Command::Run)));
    assert_eq!(cli.global.config, Path::new("settings/config.json"));
    assert_eq!(cli.global.mods, Path::new("settings/mods.toml"));
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.inis.len(), 2);
    assert!(cli.global.dry);
}

#[test]
fn test_parse_rejects_out_of_range_log_level() {
    assert!(Cli::try_parse_from(["votv-launcher", "-l", "7"]).is_err());
}

#[test]
fn test_config_overrides() {
    let cli = Cli::try_parse_from([
        "votv-launcher",
        "--set",
        "launcher.poll_interval_ms=250",
        "-s",
        "gameDir=D:/VotV",
        "--dry",
        "list",
    ])
    .unwrap();

    assert!(matches!(cli.command, Some(Command::List)));
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        "launcher.poll_interval_ms=250",
        "gameDir=D:/VotV",
        "global.dry=true",
    ]
    "#);
}
