//! # Teachbot Terminal Prompts
//!
//! File: cli/src/common/ui/prompts.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The `Console` trait is the boundary between the chat flow and whatever is
//! presenting it. It covers the handful of interactions the bot needs:
//! reading the next line of user input, printing a transcript line, asking a
//! yes/no question, asking for free text, and showing a notice.
//!
//! `TerminalConsole` implements it over any `BufRead`/`Write` pair, so the
//! binary runs it on stdin/stdout while tests feed it in-memory buffers.
//!
use crate::core::error::{Result, TeachbotError};
use anyhow::Context;
use std::io::{self, BufRead, Write};
use tracing::trace;

/// Interactions the chat flow needs from its presentation layer.
pub trait Console {
    /// Shows `prompt` and reads one line of input. `None` means input ended.
    fn read_input(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Appends one line to the transcript.
    fn print_line(&mut self, line: &str) -> Result<()>;

    /// Asks a yes/no question. End of input counts as "no".
    fn confirm(&mut self, title: &str, question: &str) -> Result<bool>;

    /// Asks for free text. `None` means the prompt was cancelled.
    fn ask_string(&mut self, title: &str, prompt: &str) -> Result<Option<String>>;

    /// Shows an informational message.
    fn notify(&mut self, title: &str, message: &str) -> Result<()>;
}

/// Line-oriented console over a reader and a writer.
pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Gives back the writer, mainly so tests can inspect the transcript.
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)
            .and_then(|_| self.writer.flush())
            .map_err(|e| TeachbotError::Prompt(format!("Failed to write prompt: {}", e)))?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| TeachbotError::Prompt(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            trace!("Input closed while waiting on prompt {:?}", prompt);
            // Keep the next output off the prompt line.
            writeln!(self.writer)
                .map_err(|e| TeachbotError::Prompt(format!("Failed to write prompt: {}", e)))?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_input(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompt_line(prompt)
    }

    fn print_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line).context("Failed to write to output")
    }

    fn confirm(&mut self, title: &str, question: &str) -> Result<bool> {
        let reply = self.prompt_line(&format!("[{}] {} [y/N] ", title, question))?;
        Ok(matches!(
            reply.as_deref().map(|r| r.trim().to_lowercase()).as_deref(),
            Some("y") | Some("yes")
        ))
    }

    fn ask_string(&mut self, title: &str, prompt: &str) -> Result<Option<String>> {
        self.prompt_line(&format!("[{}] {} ", title, prompt))
    }

    fn notify(&mut self, title: &str, message: &str) -> Result<()> {
        writeln!(self.writer, "[{}] {}", title, message).context("Failed to write to output")
    }
}
