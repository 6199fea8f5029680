// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;
use std::path::Path;
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufReader, BufWriter};

/// Returns whether `path` exists. Probe failures count as "does not exist".
pub async fn path_exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

/// Creates every missing ancestor directory of `path`.
///
/// Idempotent: existing directories are not an error.
///
/// # Errors
///
/// Returns the I/O error from `create_dir_all`.
pub async fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent).await,
        _ => Ok(()),
    }
}

/// Streams the full contents of `src` into `dst`, replacing `dst` if present.
///
/// Returns the number of bytes written. The parent directory of `dst` must
/// already exist.
///
/// # Example
/// ```no_run
/// use votv_launcher::utility::fs::copy::copy_file_async;
/// use std::path::Path;
///
/// # async fn example() -> std::io::Result<()> {
/// let bytes = copy_file_async(Path::new("in.pak"), Path::new("out/in.pak")).await?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns the first read or write error; `dst` may be left truncated.
pub async fn copy_file_async(src: &Path, dst: &Path) -> io::Result<u64> {
    let mut reader = BufReader::new(fs::File::open(src).await?);
    let mut writer = BufWriter::new(fs::File::create(dst).await?);

    let bytes = tokio::io::copy_buf(&mut reader, &mut writer).await?;
    writer.flush().await?;
    writer.into_inner().sync_all().await?;

    Ok(bytes)
}
