// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation.

use crate::config::Config;
use crate::game::GameCommand;
use crate::install::mod_entries;

/// Lines printed by `list`: one per mod entry, then the game command.
#[must_use]
pub fn format_list(config: &Config) -> Vec<String> {
    let entries = mod_entries(config);
    let width = entries.iter().map(|e| e.mod_name().len()).max().unwrap_or(0);

    let mut lines: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "{:<width$}  {} -> {}",
                entry.mod_name(),
                entry.source().display(),
                entry.destination().display()
            )
        })
        .collect();

    if lines.is_empty() {
        lines.push("No mods configured".to_string());
    }
    lines.push(format!(
        "game: {}",
        GameCommand::new(&config.paths, &config.launcher)
    ));
    lines
}

/// Main handler for list command.
pub fn run_list_command(config: &Config) {
    for line in format_list(config) {
        println!("{line}");
    }
}
