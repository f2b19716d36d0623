//! # FaqRS Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `faqrs ask` answers a single question and exits. The words given on the
//! command line are joined with spaces into one query, resolved against the
//! knowledge base, and the answer (or the fallback message) is printed to
//! stdout on its own line.
//!
//! ## Examples
//!
//! ```bash
//! faqrs ask "How do I return an item?"
//! faqrs ask where is your store
//! faqrs --kb ./faq.toml --threshold 0.3 ask do you deliver
//! ```
//!
use crate::common::assistant::Assistant;
use crate::core::config::Overrides;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

/// # Ask Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question to answer. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

impl AskArgs {
    /// The query as a single string.
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

/// # Handle Ask Command (`handle_ask`)
///
/// Loads the assistant, resolves the query once and prints the answer.
pub fn handle_ask(args: AskArgs, overrides: &Overrides) -> Result<()> {
    let query = args.query_text();
    info!("Handling ask command for query: {:?}", query);

    let assistant = Assistant::load(overrides)?;
    let answer = assistant.resolver().resolve(&query);
    println!("{}", answer);
    Ok(())
}
