//! # Knowledge Store
//!
//! File: cli/src/knowledge/store.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Ties a `KnowledgeBase` to the JSON file it lives in. The file is read in
//! full when the store is opened and rewritten in full after every record the
//! bot is taught. There are no partial updates.
//!
//! A missing file is an empty knowledge base, not an error. Unreadable or
//! malformed files are errors.
//!
//! ```rust
//! use crate::core::error::Result;
//! use crate::knowledge::store::KnowledgeStore;
//!
//! # fn run_example() -> Result<()> {
//! let mut store = KnowledgeStore::open("knowledge_base.json")?;
//! if store.knowledge().answer("Hello", 0.6).is_none() {
//!     store.teach("Hello", "Hi there!")?;
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{Result, TeachbotError};
use crate::knowledge::base::{KnowledgeBase, QaRecord};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What happened to a teaching attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeachOutcome {
    /// The pair was appended and the file rewritten. Holds the stored answer.
    Learned(String),
    /// The answer was empty or blank; nothing changed.
    EmptyAnswer,
}

/// A knowledge base backed by a JSON file.
#[derive(Debug)]
pub struct KnowledgeStore {
    path: PathBuf,
    knowledge: KnowledgeBase,
}

impl KnowledgeStore {
    /// Loads the knowledge base at `path`, or starts empty if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let knowledge = match io::read_file_if_exists(&path)? {
            Some(content) => parse(&path, &content)?,
            None => {
                info!(
                    "No knowledge base at {}, starting with an empty one",
                    path.display()
                );
                KnowledgeBase::default()
            }
        };
        debug!(
            "Loaded {} record(s) from {}",
            knowledge.len(),
            path.display()
        );
        Ok(Self { path, knowledge })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Appends `question -> answer` and rewrites the file.
    ///
    /// The answer is trimmed; a blank answer is rejected without touching
    /// memory or disk. If the write fails the record stays in memory and the
    /// error is returned.
    pub fn teach(&mut self, question: &str, answer: &str) -> Result<TeachOutcome> {
        let answer = answer.trim();
        if answer.is_empty() {
            debug!("Ignoring empty answer for {:?}", question);
            return Ok(TeachOutcome::EmptyAnswer);
        }

        self.knowledge.push(QaRecord::new(question, answer));
        self.save()?;
        info!(
            "Learned a new response for {:?} ({} record(s) stored)",
            question,
            self.knowledge.len()
        );
        Ok(TeachOutcome::Learned(answer.to_string()))
    }

    /// Rewrites the whole file from memory.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.knowledge)
            .context("Failed to serialize knowledge base")?;
        io::write_string_to_file(&self.path, &json)
            .with_context(|| format!("Failed to save knowledge base to {}", self.path.display()))
    }
}

fn parse(path: &Path, content: &str) -> Result<KnowledgeBase> {
    serde_json::from_str(content).map_err(|source| {
        TeachbotError::KnowledgeBaseFormat {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}
