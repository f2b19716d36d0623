//! # FaqRS List Command
//!
//! File: cli/src/commands/list.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `faqrs list` prints the loaded knowledge base in order, so users can see
//! which questions the assistant knows and which index `faqrs explain`
//! refers to.
//!
//! ## Examples
//!
//! ```bash
//! faqrs list
//! faqrs --kb ./faq.toml list --full
//! ```
//!
use crate::common::{assistant::Assistant, ui};
use crate::core::config::Overrides;
use crate::core::error::Result;
use clap::Parser;
use faqrs_engine::KnowledgeBase;
use tracing::info;

/// Longest answer text shown per entry unless `--full` is given.
const ANSWER_WIDTH: usize = 60;

/// # List Arguments (`ListArgs`)
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Print answers in full instead of shortening long ones.
    #[arg(long)]
    pub full: bool,
}

/// # Handle List Command (`handle_list`)
pub fn handle_list(args: ListArgs, overrides: &Overrides) -> Result<()> {
    info!("Handling list command...");
    let assistant = Assistant::load(overrides)?;
    print!(
        "{}",
        render_knowledge_base(assistant.index().knowledge_base(), &assistant.source(), args.full)
    );
    Ok(())
}

/// Formats every entry as a numbered question followed by its answer.
pub fn render_knowledge_base(kb: &KnowledgeBase, source: &str, full: bool) -> String {
    let mut lines = vec![
        ui::section_header(&format!("Knowledge Base ({} entries)", kb.len())),
        format!("Source: {}", source),
    ];
    if kb.is_empty() {
        lines.push("\nNo entries found.".to_string());
    }
    for (i, entry) in kb.entries().iter().enumerate() {
        let answer = if full {
            entry.answer.clone()
        } else {
            ui::truncate(&entry.answer, ANSWER_WIDTH)
        };
        lines.push(format!("\n[#{}] {}", i, entry.question));
        lines.push(format!("     → {}", answer));
    }
    lines.join("\n") + "\n"
}
