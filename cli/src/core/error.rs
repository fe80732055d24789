//! # Teachbot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout Teachbot. It provides a
//! consistent approach to error management with detailed error information and
//! context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `TeachbotError`: A custom error enum using `thiserror` for specific error kinds
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error kinds cover:
//! - Configuration errors (bad TOML values, invalid thresholds)
//! - Filesystem errors (unreadable or unwritable knowledge-base files)
//! - Knowledge-base format errors (malformed JSON)
//! - Prompt errors (terminal I/O failures during the chat loop)
//! - Invalid input (e.g. teaching an empty question)
//!
//! ## Examples
//!
//! ```rust
//! use crate::core::error::{Result, TeachbotError};
//! use anyhow::Context;
//! use std::{fs, path::Path};
//!
//! # fn run_example(threshold: f64, path: &Path) -> Result<()> {
//! // Return a specific error kind
//! if !(0.0..=1.0).contains(&threshold) {
//!     anyhow::bail!(TeachbotError::Config(format!("Invalid threshold: {}", threshold)));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! # Ok(())
//! # }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the Teachbot application.
#[derive(Error, Debug)]
pub enum TeachbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Knowledge base '{}' is not valid JSON: {source}", path.display())]
    KnowledgeBaseFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
