//! # Teachbot List Command
//!
//! File: cli/src/commands/list.rs
//! Author: Christi Mahu
//!
//! Implements `teachbot list`, printing every stored pair in the order it
//! was learned.
//!
//! ```text
//! Knowledge base: knowledge_base.json (2 records)
//!
//!   1. Q: Hello
//!      A: Hi there!
//!   2. Q: What is Rust?
//!      A: A systems programming language.
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::knowledge::store::KnowledgeStore;
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};

/// Arguments for `teachbot list`. Takes no options.
#[derive(Parser, Debug)]
pub struct ListArgs {}

pub fn handle_list(_args: ListArgs, config: &Config) -> Result<()> {
    let store = KnowledgeStore::open(config.knowledge_base_path())?;
    let mut stdout = io::stdout().lock();
    write_listing(&store, &mut stdout).context("Failed to write listing")
}

fn write_listing<W: Write>(store: &KnowledgeStore, out: &mut W) -> io::Result<()> {
    let knowledge = store.knowledge();
    if knowledge.is_empty() {
        return writeln!(
            out,
            "The knowledge base at {} is empty.",
            store.path().display()
        );
    }

    let count = knowledge.len();
    writeln!(
        out,
        "Knowledge base: {} ({} record{})",
        store.path().display(),
        count,
        if count == 1 { "" } else { "s" }
    )?;
    writeln!(out)?;
    for (index, record) in knowledge.records().iter().enumerate() {
        writeln!(out, "{:>3}. Q: {}", index + 1, record.question)?;
        writeln!(out, "     A: {}", record.answer)?;
    }
    Ok(())
}
