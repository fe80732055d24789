//! # Teachbot Filesystem Utilities
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! Filesystem helpers shared by the knowledge store. Import from the
//! submodule, e.g. `use crate::common::fs::io::write_string_to_file;`.
//!

/// Basic file I/O (`ensure_dir_exists`, `read_file_if_exists`, `write_string_to_file`).
pub mod io;
