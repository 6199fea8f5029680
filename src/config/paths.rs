// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory configuration.
//!
//! ```text
//! packagedPaksDir/
//!   pakchunk<id>-WindowsNoEditor.pak      (build output, source)
//! shimloaderPaksDir/
//!   <mod>/<mod>.pak                       (destination)
//! shimloaderDir/                          (optional)
//!   mod/  pak/  cfg/                      (passed to the game)
//! gameDir/
//!   VotV.exe
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::ChunkId;

/// Directory roots read from the settings file.
///
/// Keys are spelled the way the settings file spells them (`gameDir`); the
/// lowercase and `snake_case` forms are accepted too so environment and
/// `--set` overrides can reach them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Shimloader root containing `mod/`, `pak/` and `cfg/`.
    #[serde(rename = "shimloaderDir", alias = "shimloaderdir", alias = "shimloader_dir")]
    pub shimloader_dir: Option<PathBuf>,
    /// Game installation directory.
    #[serde(rename = "gameDir", alias = "gamedir", alias = "game_dir")]
    pub game_dir: Option<PathBuf>,
    /// Directory the packaged `pakchunk*.pak` files are built into.
    #[serde(
        rename = "packagedPaksDir",
        alias = "packagedpaksdir",
        alias = "packaged_paks_dir"
    )]
    pub packaged_paks_dir: Option<PathBuf>,
    /// Shimloader pak directory mods are installed into.
    #[serde(
        rename = "shimloaderPaksDir",
        alias = "shimloaderpaksdir",
        alias = "shimloader_paks_dir"
    )]
    pub shimloader_paks_dir: Option<PathBuf>,
}

impl PathsConfig {
    /// Checks that every required directory is configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` naming the first missing key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("gameDir", &self.game_dir),
            ("packagedPaksDir", &self.packaged_paks_dir),
            ("shimloaderPaksDir", &self.shimloader_paks_dir),
        ] {
            if value.as_ref().is_none_or(|p| p.as_os_str().is_empty()) {
                return Err(ConfigError::MissingKey {
                    section: "paths".to_string(),
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Shimloader root, treating an empty value as not configured.
    #[must_use]
    pub fn shimloader_dir(&self) -> Option<&Path> {
        self.shimloader_dir
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    #[must_use]
    pub fn game_dir(&self) -> &Path {
        required(self.game_dir.as_deref())
    }

    #[must_use]
    pub fn packaged_paks_dir(&self) -> &Path {
        required(self.packaged_paks_dir.as_deref())
    }

    #[must_use]
    pub fn shimloader_paks_dir(&self) -> &Path {
        required(self.shimloader_paks_dir.as_deref())
    }

    /// Packaged pak built for `chunk`.
    #[must_use]
    pub fn source_pak(&self, chunk: &ChunkId) -> PathBuf {
        self.packaged_paks_dir()
            .join(format!("pakchunk{chunk}-WindowsNoEditor.pak"))
    }

    /// Install location of the pak for `mod_name`.
    #[must_use]
    pub fn destination_pak(&self, mod_name: &str) -> PathBuf {
        self.shimloader_paks_dir()
            .join(mod_name)
            .join(format!("{mod_name}.pak"))
    }
}

/// Unset directories resolve to the empty path; `validate` rejects them first.
fn required(path: Option<&Path>) -> &Path {
    path.unwrap_or_else(|| Path::new(""))
}
