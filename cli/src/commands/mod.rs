//! # Teachbot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the subcommands of the Teachbot CLI. Each one defines
//! its own `clap` arguments struct and a `handle_*` function that receives the
//! parsed arguments together with the loaded configuration.
//!
//! - `chat`: the interactive question/answer session with the teach flow
//! - `ask`: a single lookup
//! - `teach`: store a pair directly
//! - `list`: print the knowledge base
//!

/// Interactive session (`teachbot chat`).
pub mod chat;
/// One-shot lookup (`teachbot ask`).
pub mod ask;
/// Non-interactive teaching (`teachbot teach`).
pub mod teach;
/// Knowledge base listing (`teachbot list`).
pub mod list;
