//! # Teachbot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities used by the command modules, kept apart from the
//! knowledge logic (`knowledge::`) and core infrastructure (`core::`):
//!
//! - **`fs`**: reading and writing files with error context.
//! - **`ui`**: terminal interaction (line input, confirmations, notices).
//!
//! ```rust
//! use crate::common::fs::io;
//! use crate::common::ui::prompts::{Console, TerminalConsole};
//! ```
//!

pub mod fs;
pub mod ui;
