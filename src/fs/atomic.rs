//! Atomic filesystem operations for cadence.
//!
//! Schedules, plans and suggestion files are rewritten in place by several
//! commands (`schedule`, `suggest --apply`, `optimize`). Writing them through
//! this module guarantees a reader never sees a half-written file.
//!
//! # Implementation Strategy
//!
//! All atomic writes follow this pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename the temporary file over the target
//!
//! On crash, a temporary file named `.{filename}.tmp` may remain next to the
//! target.

use crate::error::{CadenceError, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// Missing parent directories are created.
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(CadenceError::LibraryError)` - On write or rename failure
///
/// # Example
///
/// ```no_run
/// use cadence::fs::atomic::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new("weekly_plan.md"), b"# Week of 2025-10-13\n")?;
/// # Ok::<(), cadence::error::CadenceError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            CadenceError::LibraryError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically write a value as pretty-printed JSON with a trailing newline.
pub fn atomic_write_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let mut json = serde_json::to_string_pretty(value).map_err(|e| {
        CadenceError::LibraryError(format!(
            "failed to serialize '{}' to JSON: {}",
            path.display(),
            e
        ))
    })?;
    json.push('\n');
    atomic_write(path, json.as_bytes())
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CadenceError::LibraryError("invalid file path".to_string()))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to a file and sync to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        CadenceError::LibraryError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        CadenceError::LibraryError(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        CadenceError::LibraryError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

/// Rename the temporary file over the target.
fn replace(source: &Path, target: &Path) -> Result<()> {
    // rename() only replaces an existing target on POSIX.
    #[cfg(not(unix))]
    if target.exists() {
        let _ = fs::remove_file(target);
    }

    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        CadenceError::LibraryError(format!(
            "failed to atomically replace '{}': {}",
            target.display(),
            e
        ))
    })?;

    #[cfg(unix)]
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}
