//! # FaqRS Knowledge-Base Files
//!
//! File: cli/src/core/knowledge.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Loads the knowledge base the assistant answers from. The engine only
//! deals with in-memory entries, so the file format lives here:
//!
//! ```toml
//! [[entries]]
//! question = "what are your store hours"
//! answer = "We are open from 9 AM to 9 PM every day."
//!
//! [[entries]]
//! question = "where is your store located"
//! answer = "Our store is located at MG Road, Pune."
//! ```
//!
//! Entries keep the order they have in the file. When no file is configured
//! the engine's built-in sample FAQ is used instead.
//!
use crate::core::config::Config;
use crate::core::error::{FaqrsError, Result};
use anyhow::{anyhow, Context};
use faqrs_engine::{normalize, KnowledgeBase, KnowledgeEntry};
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{info, warn};

/// On-disk layout of a knowledge-base file.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct KnowledgeBaseFile {
    #[serde(default)]
    entries: Vec<KnowledgeEntry>,
}

/// Loads the knowledge base selected by `config`, or the sample FAQ when none is set.
pub fn knowledge_base_for(config: &Config) -> Result<KnowledgeBase> {
    match &config.knowledge_base.path {
        Some(path) => load_knowledge_base(Path::new(path)),
        None => {
            info!("No knowledge base configured, using the built-in sample FAQ.");
            Ok(KnowledgeBase::sample())
        }
    }
}

/// Reads and validates a TOML knowledge-base file.
pub fn load_knowledge_base(path: &Path) -> Result<KnowledgeBase> {
    if !path.is_file() {
        return Err(anyhow!(FaqrsError::FileSystem(format!(
            "Knowledge base file not found: {}",
            path.display()
        ))));
    }
    info!("Loading knowledge base from: {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read knowledge base file: {}", path.display()))?;
    parse_knowledge_base(&content)
        .with_context(|| format!("Invalid knowledge base file: {}", path.display()))
}

/// Parses knowledge-base TOML and rejects blank questions or answers.
pub fn parse_knowledge_base(content: &str) -> Result<KnowledgeBase> {
    let file: KnowledgeBaseFile = toml::from_str(content).context("Failed to parse TOML")?;

    for (i, entry) in file.entries.iter().enumerate() {
        if entry.question.trim().is_empty() {
            return Err(anyhow!(FaqrsError::KnowledgeBase(format!(
                "Entry #{} has an empty question.",
                i
            ))));
        }
        if entry.answer.trim().is_empty() {
            return Err(anyhow!(FaqrsError::KnowledgeBase(format!(
                "Entry #{} ({:?}) has an empty answer.",
                i, entry.question
            ))));
        }
        if normalize(&entry.question).is_empty() {
            warn!(
                "Entry #{} ({:?}) has no plain ASCII words and will never be matched.",
                i, entry.question
            );
        }
    }
    if file.entries.is_empty() {
        warn!("Knowledge base has no entries; every question will get the fallback message.");
    }

    Ok(KnowledgeBase::new(file.entries))
}
