//! # Teachbot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Entry point of the Teachbot CLI, a small chatbot that answers questions
//! from a JSON knowledge base using approximate string matching, and learns a
//! new answer whenever it is asked something it does not know.
//!
//! This file handles:
//! - Command-line argument parsing using Clap
//! - Setting up logging based on verbosity flags
//! - Loading configuration (with `--kb` / `--threshold` overrides)
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Interactive session
//! teachbot chat
//!
//! # One-shot question against another knowledge base
//! teachbot --kb ~/answers.json ask "What is your name?"
//!
//! # Debug logging of match scores
//! teachbot -vv chat
//! ```
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Subcommand handlers (chat, ask, teach, list)
mod common; // Shared utilities (fs, ui)
mod core; // Core infrastructure (errors, config)
mod knowledge; // Knowledge base, matching and persistence

use crate::core::config::{self, ConfigOverrides};

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "teachbot",
    about = "A chatbot that answers from what it has been taught, and asks to learn what it doesn't know.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Knowledge base file to use instead of the configured one.
    #[arg(long = "kb", value_name = "PATH", env = "TEACHBOT_KB", global = true)]
    knowledge_base: Option<PathBuf>,

    /// Minimum similarity (0.0-1.0) for a stored question to match.
    #[arg(long, value_name = "SCORE", env = "TEACHBOT_THRESHOLD", global = true)]
    threshold: Option<f64>,
}

/// All available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive session.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Answer a single question and exit.
    Ask(commands::ask::AskArgs),
    /// Store a question and its answer.
    Teach(commands::teach::TeachArgs),
    /// Show every stored question and answer.
    #[command(alias = "ls")]
    List(commands::list::ListArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let overrides = ConfigOverrides {
        knowledge_base: cli.knowledge_base,
        threshold: cli.threshold,
    };
    let command_result = config::load_config(&overrides).and_then(|cfg| match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args, &cfg),
        Commands::Ask(args) => commands::ask::handle_ask(args, &cfg),
        Commands::Teach(args) => commands::teach::handle_teach(args, &cfg),
        Commands::List(args) => commands::list::handle_list(args, &cfg),
    });

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
