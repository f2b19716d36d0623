//! # FaqRS Explain Command
//!
//! File: cli/src/commands/explain.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `faqrs explain` shows why a query gets the answer it gets. It is meant for
//! people maintaining a knowledge base who want to tune questions or the
//! similarity threshold. For one query it prints:
//!
//! - the normalized query text
//! - which of its tokens are in the vocabulary (the rest are ignored)
//! - the best-scoring entries with their cosine similarity
//! - the final answer and whether the threshold was met
//!
//! ## Examples
//!
//! ```bash
//! faqrs explain "How do I return an item?"
//! faqrs explain -k 6 store hours
//! ```
//!
use crate::common::{assistant::Assistant, ui};
use crate::core::config::Overrides;
use crate::core::error::Result;
use clap::Parser;
use faqrs_engine::{normalize, tokenize, Resolver};
use tracing::info;

/// Longest question text shown per ranked entry.
const QUESTION_WIDTH: usize = 48;

/// # Explain Arguments (`ExplainArgs`)
#[derive(Parser, Debug)]
pub struct ExplainArgs {
    /// The question to analyse. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// How many ranked entries to show.
    #[arg(short = 'k', long = "top", default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..))]
    pub top: u16,
}

/// # Handle Explain Command (`handle_explain`)
pub fn handle_explain(args: ExplainArgs, overrides: &Overrides) -> Result<()> {
    let query = args.query.join(" ");
    info!("Handling explain command for query: {:?}", query);

    let assistant = Assistant::load(overrides)?;
    print!("{}", render_explanation(&assistant.resolver(), &query, usize::from(args.top)));
    Ok(())
}

/// Builds the full explanation report for `query`.
pub fn render_explanation(resolver: &Resolver<'_>, query: &str, top: usize) -> String {
    let index = resolver.index();
    let vocabulary = index.vocabulary();
    let normalized = normalize(query);
    let tokens = tokenize(&normalized);
    let (known, unknown): (Vec<&str>, Vec<&str>) =
        tokens.into_iter().partition(|t| vocabulary.contains(t));

    let mut lines = vec![
        ui::section_header("Query Analysis"),
        format!("Query:       {}", query),
        format!("Normalized:  {}", display_or_none(&normalized)),
        format!("Recognized:  {}", display_or_none(&known.join(", "))),
        format!("Ignored:     {}", display_or_none(&unknown.join(", "))),
        format!("Threshold:   {}", resolver.config().threshold),
        String::new(),
        "Top matches:".to_string(),
    ];

    let matches = resolver.top_matches(query, top);
    if matches.is_empty() {
        lines.push("  (knowledge base is empty)".to_string());
    }
    for (rank, m) in matches.iter().enumerate() {
        let question = &index.entries()[m.entry_index].question;
        let marker = if resolver.accepts(m) && m.score > 0.0 { "✔" } else { " " };
        lines.push(format!(
            "  {} {}. [#{}] {:.4}  {}",
            marker,
            rank + 1,
            m.entry_index,
            m.score,
            ui::truncate(question, QUESTION_WIDTH)
        ));
    }

    let result = match resolver.best_match(query).filter(|m| resolver.accepts(m)) {
        Some(m) => format!("answered from entry #{}", m.entry_index),
        None => "below threshold, fallback message".to_string(),
    };
    lines.push(String::new());
    lines.push(format!("Result:      {}", result));
    lines.push(format!("Answer:      {}", resolver.resolve(query)));

    lines.join("\n") + "\n"
}

fn display_or_none(text: &str) -> &str {
    if text.is_empty() {
        "(none)"
    } else {
        text
    }
}
