// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!     LauncherError (~24 bytes)
//!              |
//!   +------+---+---+------+
//!   |      |       |      |
//!   v      v       v      v
//! Bail    Cfg    Proc   Inst
//! Box<str> Box   Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Config   MissingKey, InvalidValue
//!   Process  ExecutableNotFound, SpawnFailed, NonZeroExit, QueryFailed,
//!            WaitTimeout
//!   Install  SourceMissing, CreateDir, Copy
//!
//! All variants boxed => LauncherError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`LauncherError`].
pub type LauncherResult<T> = std::result::Result<T, LauncherError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// Fatal error that should terminate the workflow.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process control error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Mod installation error.
    #[error("install error: {0}")]
    Install(#[from] Box<InstallError>),
}

/// Create a fatal [`LauncherError::Bailed`].
pub fn bail_out(message: impl Into<String>) -> LauncherError {
    LauncherError::Bailed(message.into().into_boxed_str())
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for LauncherError {
                fn from(err: $error) -> Self {
                    LauncherError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ProcessError => Process,
    InstallError => Install,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process control errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// The process list could not be read or understood.
    #[error("process list query failed: {message}")]
    QueryFailed { message: String },

    /// Waiting for a process to exit took longer than allowed.
    #[error("process '{name}' still running after {timeout_secs} seconds")]
    WaitTimeout { name: String, timeout_secs: u64 },
}

// --- Install Errors ---

/// Per-entry mod installation errors.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The packaged pak for a mod does not exist.
    #[error("source not found: {path}")]
    SourceMissing { path: String },

    /// Destination directory could not be created.
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Streaming the pak to its destination failed.
    #[error("failed to copy '{source_path}' to '{destination}': {source}")]
    Copy {
        source_path: String,
        destination: String,
        #[source]
        source: std::io::Error,
    },
}
