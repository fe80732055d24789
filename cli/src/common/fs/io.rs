//! # Teachbot Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module centralizes the filesystem input/output operations used by the
//! knowledge store. It wraps `std::fs` with consistent error context:
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing and
//!   checks that an existing path is a directory.
//! - **`read_file_if_exists`**: Reads a whole file into a string, returning
//!   `Ok(None)` when the file does not exist. Any other failure is an error.
//! - **`write_string_to_file`**: Writes a string to a file, creating the parent
//!   directory first and replacing any previous contents.
//!
//! ```rust
//! use crate::common::fs::io;
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # fn run_example(path: &Path) -> Result<()> {
//! let content = io::read_file_if_exists(path)?.unwrap_or_default();
//! io::write_string_to_file(path, &content)?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{Result, TeachbotError};
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// Creates the directory and any missing parents (like `mkdir -p`).
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if
/// creating the directory fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(TeachbotError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file, treating a missing file as `None`.
///
/// # Errors
///
/// Returns an `Err` for every failure other than "not found" (permissions,
/// the path being a directory, invalid UTF-8, ...).
pub fn read_file_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("File not found, treating as absent: {:?}", path);
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read file {:?}", path)),
    }
}

/// Writes string content to a file path, overwriting it if it exists.
///
/// The parent directory is created first when missing.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        // A bare file name has an empty parent, meaning the current directory.
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}
