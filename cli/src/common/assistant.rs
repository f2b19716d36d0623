//! # FaqRS Assistant
//!
//! File: cli/src/common/assistant.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Every command starts the same way: load the configuration, load the
//! knowledge base it points to, and index it once. `Assistant` bundles the
//! result so command handlers only have to ask it for a resolver.
//!
//! The index is built exactly once per process and is never modified
//! afterwards; resolvers borrow it.
//!
use crate::core::config::{self, Config, Overrides};
use crate::core::error::Result;
use crate::core::knowledge;
use anyhow::Context;
use faqrs_engine::{FaqIndex, Resolver};
use tracing::info;

/// Loaded configuration plus the frozen index built from its knowledge base.
#[derive(Debug)]
pub struct Assistant {
    config: Config,
    index: FaqIndex,
}

impl Assistant {
    /// Loads configuration (applying `overrides`) and indexes the knowledge base.
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let config =
            config::load_config(overrides).context("Failed to load FaqRS configuration")?;
        Self::from_config(config)
    }

    /// Indexes the knowledge base selected by an already-validated configuration.
    pub fn from_config(config: Config) -> Result<Self> {
        let knowledge_base = knowledge::knowledge_base_for(&config)?;
        let index = FaqIndex::build_with(knowledge_base, config.matching.weighting_params());
        info!(
            "Knowledge base ready: {} entries, {} vocabulary tokens.",
            index.len(),
            index.vocabulary().len()
        );
        Ok(Self { config, index })
    }

    /// A resolver over the index using the configured threshold and fallback message.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.index, self.config.matching.resolver_config())
    }

    /// The effective configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The frozen index.
    pub fn index(&self) -> &FaqIndex {
        &self.index
    }

    /// Human-readable description of where the knowledge base came from.
    pub fn source(&self) -> String {
        match &self.config.knowledge_base.path {
            Some(path) => path.clone(),
            None => "built-in sample FAQ".to_string(),
        }
    }
}
