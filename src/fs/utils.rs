//! Filesystem inspection and maintenance helpers

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{FileKitError, Result};

/// Create a directory and any missing parents.
///
/// Does nothing if `path` is already a directory.
///
/// # Errors
/// * `IoFailure` - If the directory cannot be created, including when
///   `path` exists as a file
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| FileKitError::io(e, "create directory", path))?;
    debug!(path = %path.display(), "created directory");
    Ok(())
}

/// List the regular files directly inside `directory`.
///
/// Subdirectories are skipped; symlinks count when they point at a regular
/// file. With `extension`, only names ending in that exact suffix (e.g.
/// ".txt") are kept. Order is whatever the OS returns.
///
/// # Returns
/// Paths of the form `directory.join(name)`
///
/// # Errors
/// * `NotFound` - If `directory` does not exist
/// * `IoFailure` - If it is not a directory or cannot be read
pub fn list_files(directory: impl AsRef<Path>, extension: Option<&str>) -> Result<Vec<PathBuf>> {
    let directory = directory.as_ref();
    let entries = fs::read_dir(directory)
        .map_err(|e| FileKitError::from_io(e, "list directory", directory))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FileKitError::io(e, "list directory", directory))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(extension) = extension {
            if !entry.file_name().to_string_lossy().ends_with(extension) {
                continue;
            }
        }
        files.push(path);
    }

    debug!(directory = %directory.display(), count = files.len(), "listed files");
    Ok(files)
}

/// Check whether `path` is an existing regular file.
///
/// Directories, missing paths and anything unreadable give `false`.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Get the size of a regular file in bytes.
///
/// # Errors
/// * `NotFound` - If `path` is not a regular file
/// * `IoFailure` - If its metadata cannot be read
pub fn get_file_size(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(FileKitError::NotFound(format!("File not found: {}", path.display())));
    }

    let metadata = fs::metadata(path).map_err(|e| FileKitError::from_io(e, "stat file", path))?;
    Ok(metadata.len())
}
