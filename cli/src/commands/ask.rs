//! # Teachbot Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! Implements `teachbot ask <QUESTION>...`: a single lookup without the
//! interactive session. Prints the stored answer of the closest question, or
//! the "don't know" reply when nothing is similar enough. Never teaches.
//!
//! ```bash
//! teachbot ask what is your name
//! teachbot ask --explain "What is Rust?"
//! ```
//!
use crate::core::config::Config;
use crate::core::error::{Result, TeachbotError};
use crate::knowledge::base::KnowledgeBase;
use crate::knowledge::store::KnowledgeStore;
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};

pub const UNKNOWN_REPLY: &str = "I don't know the answer.";

/// Arguments for `teachbot ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question. Multiple words are joined with spaces, so quoting is optional.
    #[arg(required = true, num_args = 1..)]
    question: Vec<String>,

    /// Also print which stored question matched and its similarity score.
    #[arg(long)]
    explain: bool,
}

pub fn handle_ask(args: AskArgs, config: &Config) -> Result<()> {
    let question = args.question.join(" ");
    if question.trim().is_empty() {
        anyhow::bail!(TeachbotError::InvalidInput(
            "Question cannot be empty.".to_string()
        ));
    }
    let store = KnowledgeStore::open(config.knowledge_base_path())?;
    let mut stdout = io::stdout().lock();
    write_answer(
        &mut stdout,
        store.knowledge(),
        question.trim(),
        config.matching.threshold,
        args.explain,
    )
    .context("Failed to write answer")
}

fn write_answer<W: Write>(
    out: &mut W,
    knowledge: &KnowledgeBase,
    question: &str,
    threshold: f64,
    explain: bool,
) -> io::Result<()> {
    match knowledge.answer(question, threshold) {
        Some(found) => {
            writeln!(out, "{}", found.answer)?;
            if explain {
                writeln!(
                    out,
                    "(matched {:?} with similarity {:.3})",
                    found.question, found.score
                )?;
            }
        }
        None => writeln!(out, "{}", UNKNOWN_REPLY)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::base::QaRecord;

    fn knowledge() -> KnowledgeBase {
        KnowledgeBase::new(vec![
            QaRecord::new("Hello", "Hi there!"),
            QaRecord::new("What is Rust?", "A systems programming language."),
        ])
    }

    fn render(question: &str, explain: bool) -> String {
        let mut out = Vec::new();
        write_answer(&mut out, &knowledge(), question, 0.6, explain).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_matched_answer() {
        assert_eq!(render("What is Rust?", false), "A systems programming language.\n");
    }

    #[test]
    fn explain_shows_match_details() {
        let out = render("Whats rust", true);
        assert!(out.starts_with("A systems programming language.\n"));
        assert!(out.contains("matched \"What is Rust?\" with similarity 0.783"));
    }

    #[test]
    fn unknown_question() {
        assert_eq!(render("xyz", true), "I don't know the answer.\n");
    }

    #[test]
    fn parses_multi_word_question() {
        let args = AskArgs::try_parse_from(["ask", "what", "is", "rust"]).unwrap();
        assert_eq!(args.question.join(" "), "what is rust");
        assert!(!args.explain);
        assert!(AskArgs::try_parse_from(["ask"]).is_err());
    }
}
