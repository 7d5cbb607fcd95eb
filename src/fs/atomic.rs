//! Atomic file replacement.
//!
//! All writes follow this pattern:
//! 1. Write content to `.{filename}.tmp` in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! `std::fs::rename` replaces an existing destination on both POSIX and
//! Windows. Source and destination share a directory, so they share a
//! filesystem and the rename is atomic. On crash the temporary file may
//! remain.

use crate::error::{DiffCovError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically replace `path` with `content`, creating parent directories.
///
/// Whatever was at `path` before is discarded only once the new content is
/// safely on disk.
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(DiffCovError::ReportWrite)` - On directory creation, write or rename failure
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            DiffCovError::ReportWrite(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        DiffCovError::ReportWrite(format!("failed to replace '{}': {}", path.display(), e))
    })?;

    Ok(())
}

/// Temporary file path beside the target.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            DiffCovError::ReportWrite(format!("invalid report path '{}'", target.display()))
        })?;

    Ok(target.with_file_name(format!(".{}.tmp", filename)))
}

/// Write content to a file and sync to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        DiffCovError::ReportWrite(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    if let Err(e) = file.write_all(content).and_then(|()| file.sync_all()) {
        let _ = fs::remove_file(path);
        return Err(DiffCovError::ReportWrite(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        )));
    }

    Ok(())
}
