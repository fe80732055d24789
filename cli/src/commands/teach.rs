//! # Teachbot Teach Command
//!
//! File: cli/src/commands/teach.rs
//! Author: Christi Mahu
//!
//! Implements `teachbot teach <QUESTION> <ANSWER>`, which stores a pair
//! without going through the interactive session. The pair is always
//! appended, even when a similar question is already known. As in the chat
//! session, a blank answer is refused and leaves the file untouched.
//!
use crate::core::config::Config;
use crate::core::error::{Result, TeachbotError};
use crate::knowledge::store::{KnowledgeStore, TeachOutcome};
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};

/// Arguments for `teachbot teach`.
#[derive(Parser, Debug)]
pub struct TeachArgs {
    /// The question the user will ask.
    question: String,
    /// The answer the bot should give.
    answer: String,
}

pub fn handle_teach(args: TeachArgs, config: &Config) -> Result<()> {
    let mut store = KnowledgeStore::open(config.knowledge_base_path())?;
    let mut stdout = io::stdout().lock();
    teach_pair(&mut store, &args.question, &args.answer, &mut stdout)
}

fn teach_pair<W: Write>(
    store: &mut KnowledgeStore,
    question: &str,
    answer: &str,
    out: &mut W,
) -> Result<()> {
    let question = question.trim();
    if question.is_empty() {
        anyhow::bail!(TeachbotError::InvalidInput(
            "Question cannot be empty.".to_string()
        ));
    }

    let message = match store.teach(question, answer)? {
        TeachOutcome::Learned(_) => format!(
            "Thank you! I learned a new response! ({} stored in {})",
            store.knowledge().len(),
            store.path().display()
        ),
        TeachOutcome::EmptyAnswer => "Please provide a valid answer.".to_string(),
    };
    writeln!(out, "{}", message).context("Failed to write to output")
}
