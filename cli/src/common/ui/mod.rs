//! # Teachbot UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! User-facing terminal interaction. The chat session talks to the user only
//! through the `prompts::Console` trait, which keeps the session logic free
//! of any particular presentation.
//!
//! - **`prompts`**: line input, `[y/N]` confirmation, free-text questions and notices.
//!

pub mod prompts;
