//! # Qabot Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` used by the knowledge base store. Each one
//! attaches the offending path to its error through `anyhow::Context`.
//!
//! - **`ensure_dir_exists`**: Creates a directory (and parents) when missing, and rejects a path that exists but is not a directory.
//! - **`read_file_to_string`**: Reads a whole file with path context on failure.
//! - **`write_string_atomically`**: Writes to a sibling `<name>.tmp` file and renames it over the target, so a crash mid-write never leaves a truncated knowledge base behind.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::common::fs::io;
//!
//! let raw = io::read_file_to_string(path)?;
//! io::write_string_atomically(path, &raw)?;
//! ```
//!
use crate::core::error::{QabotError, Result};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(QabotError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Replaces the content of `path` with `content`.
///
/// The parent directory is created if needed. Content is first written to a
/// temporary sibling file which is then renamed over `path`.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be created, or if writing
/// or renaming the temporary file fails. The temporary file is removed on a
/// failed rename.
pub fn write_string_atomically(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        // `Path::parent` yields "" for a bare file name.
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }

    let tmp = tmp_path(path);
    fs::write(&tmp, content)
        .with_context(|| format!("Failed to write to temporary file {:?}", tmp))?;

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("Failed to replace file {:?}", path));
    }
    debug!("Wrote content to file: {:?}", path);
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "knowledge_base".to_string());
    path.with_file_name(format!("{file_name}.tmp"))
}
