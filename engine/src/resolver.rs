//! # FaqRS Query Resolver
//!
//! File: engine/src/resolver.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The resolver answers one query at a time against a frozen [`FaqIndex`]:
//!
//! 1. Normalize and tokenize the query exactly like the questions were.
//! 2. Project it onto the existing vocabulary. Unknown tokens are ignored and
//!    no IDF value is re-fitted.
//! 3. Score it against every question with cosine similarity, which for two
//!    unit vectors is just the dot product.
//! 4. Take the highest score; on a tie the entry listed first wins.
//! 5. Return that entry's answer if the score reaches the threshold,
//!    otherwise the fallback message.
//!
//! A query with no recognized tokens projects to the zero vector. It has
//! similarity 0 with everything and always gets the fallback message.
//!
//! ## Concurrency
//!
//! `Resolver` only holds a shared reference to the index and its own
//! configuration. Every call allocates its own query vector, so resolvers can
//! run in parallel on as many threads as needed without locking.
//!
use crate::index::FaqIndex;
use crate::normalize::{normalize, tokenize};
use crate::vocabulary::WeightVector;
use std::cmp::Ordering;
use tracing::debug;

/// Minimum similarity for a match when nothing else is configured.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Message returned when no entry is similar enough to the query.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Sorry, I couldn’t find an answer. Could you rephrase?";

/// Decision parameters for a [`Resolver`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Best scores strictly below this value produce the fallback message.
    pub threshold: f64,
    /// Returned instead of an answer when no entry is close enough.
    pub fallback_message: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// A knowledge-base entry scored against a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    /// Position of the entry in the knowledge base.
    pub entry_index: usize,
    /// Cosine similarity between the query and the entry's question.
    pub score: f64,
}

/// Resolves queries against a borrowed, immutable [`FaqIndex`].
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    index: &'a FaqIndex,
    config: ResolverConfig,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over `index`.
    pub fn new(index: &'a FaqIndex, config: ResolverConfig) -> Self {
        Self { index, config }
    }

    /// The index this resolver reads from.
    pub fn index(&self) -> &'a FaqIndex {
        self.index
    }

    /// The decision parameters in use.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Projects `query` into the index's vector space.
    pub fn query_vector(&self, query: &str) -> WeightVector {
        let normalized = normalize(query);
        let tokens = tokenize(&normalized);
        self.index.vocabulary().vectorize(&tokens)
    }

    /// Cosine similarity of `query` with every entry, in knowledge-base order.
    pub fn scores(&self, query: &str) -> Vec<f64> {
        let query_vector = self.query_vector(query);
        self.scores_for(&query_vector)
    }

    /// The highest-scoring entry, first one on ties.
    ///
    /// `None` when the knowledge base is empty or the query has no
    /// recognized tokens.
    pub fn best_match(&self, query: &str) -> Option<Match> {
        let query_vector = self.query_vector(query);
        if query_vector.is_zero() {
            debug!("Query {:?} has no tokens in the vocabulary.", query);
            return None;
        }

        let mut best: Option<Match> = None;
        for (entry_index, score) in self.scores_for(&query_vector).into_iter().enumerate() {
            // Strict comparison keeps the earliest entry on ties.
            match best {
                Some(b) if score <= b.score => {}
                _ => best = Some(Match { entry_index, score }),
            }
        }
        best
    }

    /// The `k` highest-scoring entries, score descending then position ascending.
    pub fn top_matches(&self, query: &str, k: usize) -> Vec<Match> {
        let mut matches: Vec<Match> = self
            .scores(query)
            .into_iter()
            .enumerate()
            .map(|(entry_index, score)| Match { entry_index, score })
            .collect();
        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.entry_index.cmp(&b.entry_index))
        });
        matches.truncate(k);
        matches
    }

    /// Whether `m` is good enough to be answered under the current threshold.
    pub fn accepts(&self, m: &Match) -> bool {
        m.score >= self.config.threshold
    }

    /// Answers `query` with the best entry's answer or the fallback message.
    pub fn resolve(&self, query: &str) -> String {
        match self.best_match(query) {
            Some(m) if self.accepts(&m) => {
                debug!(
                    "Matched entry #{} with similarity {:.4} (threshold {}).",
                    m.entry_index, m.score, self.config.threshold
                );
                self.index.entries()[m.entry_index].answer.clone()
            }
            Some(m) => {
                debug!(
                    "Best similarity {:.4} (entry #{}) is below threshold {}.",
                    m.score, m.entry_index, self.config.threshold
                );
                self.config.fallback_message.clone()
            }
            None => self.config.fallback_message.clone(),
        }
    }

    fn scores_for(&self, query_vector: &WeightVector) -> Vec<f64> {
        if query_vector.is_zero() {
            return vec![0.0; self.index.len()];
        }
        self.index
            .document_vectors()
            .iter()
            .map(|doc| doc.dot(query_vector))
            .collect()
    }
}

/// Answers `query` against `index` using `threshold` and the default fallback message.
pub fn resolve(query: &str, index: &FaqIndex, threshold: f64) -> String {
    let config = ResolverConfig {
        threshold,
        ..ResolverConfig::default()
    };
    Resolver::new(index, config).resolve(query)
}
