// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. settings file   (--config, default config.json)
//! 3. mod list file   (--mods, default mods.json)
//! 4. votv-launcher.toml in cwd (optional)
//! 5. --ini overlays
//! 6. VOTV_* env vars
//! 7. --set / CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! VOTV_GAMEDIR=D:/Games/VotV             → gameDir
//! VOTV_GLOBAL__DRY=true                  → global.dry
//! VOTV_LAUNCHER__POLL_INTERVAL_MS=500    → launcher.poll_interval_ms
//! ```
//!
//! The configuration is loaded once and then passed by reference into each
//! phase; nothing reads it from global state.

pub mod loader;
pub mod paths;
pub mod types;


use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{GlobalConfig, LauncherConfig, ModSpec};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory roots (top-level keys of the settings file).
    ///
    /// Read in a separate pass over the same root table so the `config`
    /// crate's value coercion still applies to every other section.
    #[serde(skip)]
    pub paths: PathsConfig,
    /// Mods to install, in order.
    pub mods: Vec<ModSpec>,
    /// Global options.
    pub global: GlobalConfig,
    /// Game process options.
    pub launcher: LauncherConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use votv_launcher::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_file("config.json")
    ///     .add_file("mods.json")
    ///     .with_env_prefix("VOTV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid JSON, does not match the
    /// `Config` structure, or fails validation.
    pub fn parse_json(content: &str) -> crate::error::Result<Self> {
        Self::builder()
            .add_str(content, config::FileFormat::Json)
            .build()
    }

    /// Checks required directories, launcher options and every mod entry.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.paths.validate()?;
        self.launcher.validate()?;
        for spec in &self.mods {
            spec.validate()?;
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`; the mod list keeps
    /// its configured order.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_paths_options(&mut options);
        self.format_launcher_options(&mut options);
        options.insert("global.dry".to_string(), self.global.dry.to_string());

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .chain(
                self.mods
                    .iter()
                    .enumerate()
                    .map(|(i, spec)| format!("mods[{i}] = {} {}", spec.chunk, spec.name)),
            )
            .collect()
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |p: Option<&Path>| p.map_or_else(String::new, |p| p.display().to_string());

        options.insert("shimloaderDir".into(), fmt(self.paths.shimloader_dir()));
        options.insert("gameDir".into(), fmt(self.paths.game_dir.as_deref()));
        options.insert(
            "packagedPaksDir".into(),
            fmt(self.paths.packaged_paks_dir.as_deref()),
        );
        options.insert(
            "shimloaderPaksDir".into(),
            fmt(self.paths.shimloader_paks_dir.as_deref()),
        );
    }

    fn format_launcher_options(&self, options: &mut BTreeMap<String, String>) {
        let launcher = &self.launcher;
        options.insert(
            "launcher.process_name".into(),
            launcher.process_name.clone(),
        );
        options.insert("launcher.executable".into(), launcher.executable.clone());
        options.insert(
            "launcher.poll_interval_ms".into(),
            launcher.poll_interval_ms.to_string(),
        );
        options.insert(
            "launcher.wait_timeout_secs".into(),
            launcher
                .wait_timeout_secs
                .map_or_else(|| "none".to_string(), |s| s.to_string()),
        );
        options.insert(
            "launcher.stay_attached".into(),
            launcher.stay_attached.to_string(),
        );
    }
}
