// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! ```text
//! mods.json   { "mods": [[5, "Foo"], ["12", "Bar"], { chunk = 9, name = "Baz" }] }
//!                         |
//!                         v
//!              ModSpec { chunk: ChunkId, name }
//!
//! [launcher]  process_name, executable, poll_interval_ms,
//!             wait_timeout_secs, stay_attached
//! [global]    dry
//! ```

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Image name of the running game, as listed by the OS process table.
pub const DEFAULT_PROCESS_NAME: &str = "VotV-Win64-Shipping.exe";

/// Launcher executable inside the game directory.
pub const DEFAULT_EXECUTABLE: &str = "VotV.exe";

/// Interval between process-list queries while waiting for the game to exit.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Identifier of a packaged pak chunk (`pakchunk<id>-WindowsNoEditor.pak`).
///
/// Mod lists use either non-negative integers or strings, both are accepted
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ChunkId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ChunkId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One configured mod: the chunk it is packaged into and its display name.
///
/// The name is used both as the destination folder and the pak file stem.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ModSpecRepr")]
pub struct ModSpec {
    pub chunk: ChunkId,
    pub name: String,
}

impl ModSpec {
    pub fn new(chunk: impl Into<ChunkId>, name: impl Into<String>) -> Self {
        Self {
            chunk: chunk.into(),
            name: name.into(),
        }
    }

    /// Checks that the mod can be turned into a destination path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for empty chunk ids or names, and for
    /// names that would escape the shimloader pak directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            section: "mods".to_string(),
            key: self.name.clone(),
            message,
        };

        if let ChunkId::Text(chunk) = &self.chunk
            && chunk.trim().is_empty()
        {
            return Err(invalid("chunk id is empty".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(invalid(format!("mod name for chunk {} is empty", self.chunk)));
        }
        if self.name.contains(['/', '\\']) || self.name == "." || self.name == ".." {
            return Err(invalid(format!(
                "mod name '{}' must be a single folder name",
                self.name
            )));
        }
        Ok(())
    }
}

/// Accepted spellings of a mod list item.
#[derive(Deserialize)]
#[serde(untagged)]
enum ModSpecRepr {
    Pair(RawChunk, String),
    Table {
        #[serde(alias = "chunkId", alias = "chunkid", alias = "chunk_id")]
        chunk: RawChunk,
        #[serde(alias = "modName", alias = "modname", alias = "mod_name")]
        name: String,
    },
}

/// A chunk id as written, before range checks.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawChunk {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl TryFrom<ModSpecRepr> for ModSpec {
    type Error = ConfigError;

    fn try_from(repr: ModSpecRepr) -> Result<Self, Self::Error> {
        let (ModSpecRepr::Pair(raw, name) | ModSpecRepr::Table { chunk: raw, name }) = repr;

        let chunk = match raw {
            RawChunk::Unsigned(n) => ChunkId::Number(n),
            RawChunk::Text(text) => ChunkId::Text(text),
            RawChunk::Signed(n) => return Err(invalid_chunk(&name, &n.to_string())),
            RawChunk::Float(n) => return Err(invalid_chunk(&name, &n.to_string())),
        };
        Ok(Self { chunk, name })
    }
}

fn invalid_chunk(name: &str, chunk: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: "mods".to_string(),
        key: name.to_string(),
        message: format!("chunk id {chunk} must be a non-negative integer or a string"),
    }
}

/// Global options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log every step without killing, copying or launching anything.
    pub dry: bool,
}

/// Game process control and launch options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Image name used to find and kill the running game.
    pub process_name: String,
    /// Executable started from the game directory.
    pub executable: String,
    /// Milliseconds between process-list queries.
    pub poll_interval_ms: u64,
    /// Give up waiting for the old game to exit after this many seconds.
    pub wait_timeout_secs: Option<u64>,
    /// Keep the launcher running until the game exits so its exit code is
    /// logged. When off, the launcher returns right after starting the game.
    pub stay_attached: bool,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            process_name: DEFAULT_PROCESS_NAME.to_string(),
            executable: DEFAULT_EXECUTABLE.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            wait_timeout_secs: None,
            stay_attached: true,
        }
    }
}

impl LauncherConfig {
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    #[must_use]
    pub fn wait_timeout(&self) -> Option<Duration> {
        self.wait_timeout_secs.map(Duration::from_secs)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: &str| ConfigError::InvalidValue {
            section: "launcher".to_string(),
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.process_name.trim().is_empty() {
            return Err(invalid("process_name", "must not be empty"));
        }
        if self.executable.trim().is_empty() {
            return Err(invalid("executable", "must not be empty"));
        }
        if self.poll_interval_ms == 0 {
            return Err(invalid("poll_interval_ms", "must be greater than zero"));
        }
        Ok(())
    }
}
