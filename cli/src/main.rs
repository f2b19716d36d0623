//! # FaqRS Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the FaqRS CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`ask`, `chat`, ...) is a variant in the `Commands` enum
//! - Global options (`--kb`, `--threshold`) become `Overrides` passed to every handler
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! ```bash
//! # Ask a single question against the built-in sample FAQ
//! faqrs ask "How do I return an item?"
//!
//! # Chat against your own knowledge base with debug logging
//! faqrs -vv --kb ./faq.toml chat
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (ask, chat, explain, list)
mod common; // Shared helpers (assistant loading, output formatting)
mod core; // Core infrastructure (errors, config, knowledge-base files)

use crate::core::config::Overrides;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "faqrs",
    about = "FaqRS: answers questions from a FAQ knowledge base",
    long_about = "Matches free-form questions against a knowledge base of question/answer pairs\n\
                  using TF-IDF similarity and prints the closest answer.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Knowledge-base TOML file to answer from (defaults to the built-in sample FAQ).
    #[arg(long, env = "FAQRS_KB", global = true)]
    kb: Option<PathBuf>,

    /// Minimum similarity (0 to 1) for an answer to be given.
    #[arg(long, global = true)]
    threshold: Option<f64>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            knowledge_base: self.kb.clone(),
            threshold: self.threshold,
        }
    }
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Answer a single question.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Chat interactively on the terminal.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Show how a question is scored against the knowledge base.
    Explain(commands::explain::ExplainArgs),
    /// List the knowledge base.
    #[command(alias = "l")]
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

    let overrides = cli.overrides();
    let command_result = match cli.command {
        Commands::Ask(args) => commands::ask::handle_ask(args, &overrides),
        Commands::Chat(args) => commands::chat::handle_chat(args, &overrides),
        Commands::Explain(args) => commands::explain::handle_explain(args, &overrides),
        Commands::List(args) => commands::list::handle_list(args, &overrides),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
