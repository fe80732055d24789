//! # Teachbot Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `teachbot chat`, the interactive session. Each line the user
//! types is handled in one of four ways:
//!
//! 1. A blank line is ignored.
//! 2. `quit` (any case) ends the session immediately.
//! 3. If a stored question is similar enough, its answer is printed.
//! 4. Otherwise the bot admits it does not know and offers to be taught. If
//!    the user agrees and types a non-empty answer, the pair is stored and the
//!    knowledge-base file is rewritten. An empty answer changes nothing.
//!
//! The session talks to the user only through `Console`, so the same flow
//! runs on a terminal or on scripted input in tests.
//!
//! ## Examples
//!
//! ```bash
//! teachbot chat
//! teachbot --kb ~/answers.json --threshold 0.7 chat
//! ```
//!
use crate::common::ui::prompts::{Console, TerminalConsole};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::knowledge::store::{KnowledgeStore, TeachOutcome};
use clap::Parser;
use tracing::{debug, info};

/// Input that ends the session.
pub const QUIT_COMMAND: &str = "quit";

const TEACH_TITLE: &str = "Teach Me";
const UNKNOWN_REPLY: &str = "I don't know the answer. Do you want to teach me?";
const LEARNED_NOTICE: &str = "Thank you! I learned a new response!";
const INVALID_ANSWER_REPLY: &str = "Please provide a valid answer.";

/// Arguments for `teachbot chat`.
#[derive(Parser, Debug)]
pub struct ChatArgs {}

/// How a single line of input was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Blank input; nothing happened.
    Ignored,
    /// The quit sentinel; the session should end.
    Quit,
    /// A stored answer was given.
    Answered,
    /// No match, and the user taught a new answer.
    Taught,
    /// No match, and the user chose not to teach.
    Declined,
    /// No match, and the user's answer was empty.
    InvalidAnswer,
}

/// One interactive conversation over a knowledge store.
pub struct ChatSession<'s> {
    store: &'s mut KnowledgeStore,
    threshold: f64,
    bot_name: String,
}

impl<'s> ChatSession<'s> {
    pub fn new(store: &'s mut KnowledgeStore, threshold: f64, bot_name: impl Into<String>) -> Self {
        Self {
            store,
            threshold,
            bot_name: bot_name.into(),
        }
    }

    /// Reads and handles lines until `quit` or end of input.
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<()> {
        loop {
            let Some(line) = console.read_input("You: ")? else {
                debug!("Input ended, closing chat session");
                break;
            };
            if self.handle_input(console, &line)? == Turn::Quit {
                self.say(console, "Goodbye!")?;
                break;
            }
        }
        Ok(())
    }

    /// Handles one line of user input.
    pub fn handle_input<C: Console>(&mut self, console: &mut C, raw: &str) -> Result<Turn> {
        let input = raw.trim();
        if input.is_empty() {
            return Ok(Turn::Ignored);
        }
        if input.eq_ignore_ascii_case(QUIT_COMMAND) {
            info!("Quit requested");
            return Ok(Turn::Quit);
        }

        let reply = self
            .store
            .knowledge()
            .answer(input, self.threshold)
            .map(|found| found.answer.to_string());

        match reply {
            Some(answer) => {
                self.say(console, &answer)?;
                Ok(Turn::Answered)
            }
            None => {
                self.say(console, UNKNOWN_REPLY)?;
                self.offer_to_learn(console, input)
            }
        }
    }

    fn offer_to_learn<C: Console>(&mut self, console: &mut C, question: &str) -> Result<Turn> {
        if !console.confirm(TEACH_TITLE, "Do you want to teach me?")? {
            debug!("User declined to teach an answer for {:?}", question);
            return Ok(Turn::Declined);
        }

        let answer = console
            .ask_string(TEACH_TITLE, "Enter the answer:")?
            .unwrap_or_default();

        match self.store.teach(question, &answer)? {
            TeachOutcome::Learned(stored) => {
                console.notify(TEACH_TITLE, LEARNED_NOTICE)?;
                self.say(console, &stored)?;
                Ok(Turn::Taught)
            }
            TeachOutcome::EmptyAnswer => {
                self.say(console, INVALID_ANSWER_REPLY)?;
                Ok(Turn::InvalidAnswer)
            }
        }
    }

    fn say<C: Console>(&self, console: &mut C, text: &str) -> Result<()> {
        console.print_line(&format!("{}: {}", self.bot_name, text))?;
        console.print_line("")
    }
}

/// # Handle Chat Command (`handle_chat`)
///
/// Opens the configured knowledge base and runs an interactive session on
/// stdin/stdout.
pub fn handle_chat(_args: ChatArgs, config: &Config) -> Result<()> {
    let mut store = KnowledgeStore::open(config.knowledge_base_path())?;
    info!(
        "Starting chat with {} known question(s) from {}",
        store.knowledge().len(),
        store.path().display()
    );

    let bot_name = config.chat.bot_name.clone();
    let mut console = TerminalConsole::stdio();
    console.print_line(&format!(
        "Chat with {}! Type '{}' to exit.",
        bot_name, QUIT_COMMAND
    ))?;

    ChatSession::new(&mut store, config.matching.threshold, bot_name).run(&mut console)
}
