//! # Teachbot Knowledge
//!
//! File: cli/src/knowledge/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything the bot knows and how it looks things up:
//! - `matcher`: the similarity ratio and closest-match selection
//! - `base`: the in-memory question/answer records and lookups
//! - `store`: loading from and persisting to the JSON file
//!
//! Commands open a `store::KnowledgeStore`, query its `base::KnowledgeBase`
//! and call `teach` when the user supplies a new answer.
//!

pub mod base;
pub mod matcher;
pub mod store;
