// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod installation.
//!
//! ```text
//! Config.mods [(chunk, name), ...]  +  PathsConfig
//!          |
//!          v  mod_entries()
//! ModEntry { mod_name, source, destination }
//!          |
//!          v  install_all()  (one entry after another)
//!   source exists? ── no ──> SourceMissing   (error log, next entry)
//!          | yes
//!   dry run? ── yes ──> Planned
//!          | no
//!   ensure_parent_dir ── err ──> fatal, propagates
//!          |
//!   copy_file_async ── err ──> CopyFailed(reason)  (error log, next entry)
//!          |
//!          v
//!   Copied { bytes }
//! ```

#[cfg(test)]
mod tests;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::config::Config;
use crate::config::paths::PathsConfig;
use crate::config::types::ModSpec;
use crate::error::{InstallError, LauncherResult};
use crate::utility::fs::copy::{copy_file_async, ensure_parent_dir, path_exists};

/// One mod to install: where its pak is built and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModEntry {
    mod_name: String,
    source: PathBuf,
    destination: PathBuf,
}

impl ModEntry {
    #[must_use]
    pub fn new(
        mod_name: impl Into<String>,
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            mod_name: mod_name.into(),
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Derives the entry for `spec` from the configured directory roots.
    #[must_use]
    pub fn from_spec(paths: &PathsConfig, spec: &ModSpec) -> Self {
        Self::new(
            spec.name.clone(),
            paths.source_pak(&spec.chunk),
            paths.destination_pak(&spec.name),
        )
    }

    #[must_use]
    pub fn mod_name(&self) -> &str {
        &self.mod_name
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// All configured mods as entries, in mod list order.
#[must_use]
pub fn mod_entries(config: &Config) -> Vec<ModEntry> {
    config
        .mods
        .iter()
        .map(|spec| ModEntry::from_spec(&config.paths, spec))
        .collect()
}

/// What happened to a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The pak was copied; `bytes` were written.
    Copied { bytes: u64 },
    /// The packaged pak does not exist; nothing was touched.
    SourceMissing,
    /// Copying failed part way; the reason includes both paths.
    CopyFailed { reason: String },
    /// Dry run: the source exists and would have been copied.
    Planned,
}

impl InstallOutcome {
    /// Whether the entry ended up (or would end up) installed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Copied { .. } | Self::Planned)
    }
}

impl fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copied { bytes } => write!(f, "copied ({bytes} bytes)"),
            Self::SourceMissing => f.write_str("source missing"),
            Self::CopyFailed { reason } => write!(f, "copy failed: {reason}"),
            Self::Planned => f.write_str("planned"),
        }
    }
}

/// An entry together with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub entry: ModEntry,
    pub outcome: InstallOutcome,
}

/// Installs a single entry.
///
/// Missing sources and copy errors are logged and returned as outcomes.
///
/// # Errors
///
/// Returns `InstallError::CreateDir` if the destination directory cannot be
/// created.
pub async fn install_mod(entry: &ModEntry, dry: bool) -> LauncherResult<InstallOutcome> {
    if !path_exists(entry.source()).await {
        let missing = InstallError::SourceMissing {
            path: entry.source().display().to_string(),
        };
        error!(mod_name = %entry.mod_name(), "{missing}");
        return Ok(InstallOutcome::SourceMissing);
    }

    if dry {
        info!(
            mod_name = %entry.mod_name(),
            source = %entry.source().display(),
            destination = %entry.destination().display(),
            "would install mod"
        );
        return Ok(InstallOutcome::Planned);
    }

    ensure_parent_dir(entry.destination())
        .await
        .map_err(|source| InstallError::CreateDir {
            path: entry
                .destination()
                .parent()
                .unwrap_or(entry.destination())
                .display()
                .to_string(),
            source,
        })?;

    match copy_file_async(entry.source(), entry.destination()).await {
        Ok(bytes) => {
            info!(
                mod_name = %entry.mod_name(),
                destination = %entry.destination().display(),
                bytes,
                "installed mod"
            );
            Ok(InstallOutcome::Copied { bytes })
        }
        Err(source) => {
            let failure = InstallError::Copy {
                source_path: entry.source().display().to_string(),
                destination: entry.destination().display().to_string(),
                source,
            };
            error!(mod_name = %entry.mod_name(), "{failure}");
            Ok(InstallOutcome::CopyFailed {
                reason: failure.to_string(),
            })
        }
    }
}

/// Installs every entry in order, one after another.
///
/// # Errors
///
/// Stops at the first directory creation failure; per-entry copy problems
/// never stop the batch.
pub async fn install_all(entries: &[ModEntry], dry: bool) -> LauncherResult<Vec<InstallReport>> {
    let mut reports = Vec::with_capacity(entries.len());

    for entry in entries {
        debug!(
            mod_name = %entry.mod_name(),
            source = %entry.source().display(),
            "installing"
        );
        let outcome = install_mod(entry, dry).await?;
        reports.push(InstallReport {
            entry: entry.clone(),
            outcome,
        });
    }

    let installed = reports.iter().filter(|r| r.outcome.is_success()).count();
    info!(
        installed,
        skipped = reports.len() - installed,
        total = reports.len(),
        "mod installation finished"
    );
    Ok(reports)
}
