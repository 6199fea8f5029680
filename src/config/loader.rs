// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_file(config.json)        required, format from extension
//!   .add_file(mods.json)          required
//!   .add_file_optional(overlay)
//!   .add_str(content, format)
//!   .with_env_prefix("VOTV")
//!   .set("global.dry", true)
//!        |
//!        v
//!    build() --> Config (validated)
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};

use super::Config;
use super::paths::PathsConfig;
use crate::error::Result;

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a configuration file; JSON and TOML are told apart by extension.
    ///
    /// The file is read when `build()` is called. If it doesn't exist or
    /// cannot be parsed, `build()` returns an error.
    #[must_use]
    pub fn add_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let p = path.as_ref();
        self.builder = self.builder.add_source(File::from(p).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        let p = path.as_ref();
        self.builder = self.builder.add_source(File::from(p).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_str(mut self, content: &str, format: FileFormat) -> Self {
        self.builder = self.builder.add_source(File::from_str(content, format));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `PREFIX_KEY` variables; `__` separates nested keys
    /// (`VOTV_LAUNCHER__POLL_INTERVAL_MS`).
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .with_context(|| format!("invalid override for '{key}'"))?;
        Ok(self)
    }

    /// Applies `key=value` overrides as given on the command line.
    ///
    /// # Errors
    ///
    /// Returns an error if an override has no `=` or an invalid key.
    pub fn set_all<I, S>(self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        overrides.into_iter().try_fold(self, |loader, entry| {
            let entry = entry.as_ref();
            let (key, value) = entry
                .split_once('=')
                .with_context(|| format!("override '{entry}' must look like KEY=VALUE"))?;
            let key = key.trim();
            loader.set(key, override_value(key, value.trim()))
        })
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing or malformed.
    /// - The merged configuration cannot be deserialized into `Config`.
    /// - Validation fails (missing directories, bad mod names).
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let cfg = builder.build()?;
        let paths: PathsConfig = cfg.clone().try_deserialize()?;
        let mut config: Config = cfg.try_deserialize()?;
        config.paths = paths;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> &[(String, PathBuf)] {
        &self.files
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

/// Keys holding paths or names, in any accepted spelling once lowercased and
/// stripped of `_`.
const STRING_KEYS: &[&str] = &[
    "gamedir",
    "shimloaderdir",
    "packagedpaksdir",
    "shimloaderpaksdir",
    "processname",
    "executable",
];

fn is_string_key(key: &str) -> bool {
    let leaf = key.rsplit('.').next().unwrap_or(key);
    let normalized: String = leaf
        .chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    STRING_KEYS.contains(&normalized.as_str())
}

/// Types a command-line override the way a config file would.
///
/// Path and name keys stay strings, so `gameDir=2024` is a directory.
fn override_value(key: &str, raw: &str) -> config::Value {
    if is_string_key(key) {
        raw.into()
    } else if let Ok(flag) = raw.parse::<bool>() {
        flag.into()
    } else if let Ok(number) = raw.parse::<i64>() {
        number.into()
    } else {
        raw.into()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
