//! # FaqRS Knowledge Base
//!
//! File: engine/src/knowledge.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A knowledge base is an ordered list of question/answer pairs. Order only
//! matters for tie-breaking: when two questions score the same against a
//! query, the one listed first wins.
//!
//! The content itself is data, not code. Front ends load it from wherever
//! they like (`KnowledgeEntry` derives `Deserialize`) and fall back to
//! [`KnowledgeBase::sample`], a small store FAQ, when nothing is configured.
//!
use serde::Deserialize;

/// A single question/answer pair.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeEntry {
    /// The question as written by the knowledge-base author.
    pub question: String,
    /// The answer returned when a query matches `question`.
    pub answer: String,
}

impl KnowledgeEntry {
    /// Creates an entry from anything convertible into strings.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// An ordered, immutable collection of [`KnowledgeEntry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    /// Wraps an ordered list of entries.
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        Self { entries }
    }

    /// The built-in store FAQ used when no knowledge base is configured.
    pub fn sample() -> Self {
        [
            ("Hello", "Hello! You can ask anything."),
            (
                "what are your store hours",
                "We are open from 9 AM to 9 PM every day.",
            ),
            (
                "how can i return a product",
                "You can return any product within 30 days of purchase.",
            ),
            (
                "do you offer home delivery",
                "Yes, we provide free home delivery for orders above ₹500.",
            ),
            (
                "what payment methods do you accept",
                "We accept cash, credit/debit cards, and UPI payments.",
            ),
            (
                "where is your store located",
                "Our store is located at MG Road, Pune.",
            ),
        ]
        .into_iter()
        .map(|(q, a)| KnowledgeEntry::new(q, a))
        .collect()
    }

    /// All entries, in knowledge-base order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// The entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&KnowledgeEntry> {
        self.entries.get(index)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the knowledge base has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<KnowledgeEntry> for KnowledgeBase {
    fn from_iter<I: IntoIterator<Item = KnowledgeEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<KnowledgeEntry>> for KnowledgeBase {
    fn from(entries: Vec<KnowledgeEntry>) -> Self {
        Self::new(entries)
    }
}
