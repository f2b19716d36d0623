//! # FaqRS Matching Engine
//!
//! File: engine/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Given a free-form user query, this crate selects the closest matching entry
//! from a fixed knowledge base of question/answer pairs using TF-IDF weighted
//! vectors and cosine similarity. It has two phases:
//!
//! - **Indexing** (`FaqIndex::build`): runs once. Normalizes every question,
//!   fits a vocabulary with smoothed IDF weights and stores one unit-length
//!   vector per question.
//! - **Resolving** (`Resolver::resolve`): runs once per query. Projects the
//!   query into the same space, scores it against every question and returns
//!   the best answer, or a fallback message when nothing is close enough.
//!
//! The index is immutable once built. Front ends build it at startup and hand
//! out shared references; resolving never mutates anything, so any number of
//! threads can resolve against the same index without locking.
//!
//! ## Examples
//!
//! ```rust
//! use faqrs_engine::{FaqIndex, KnowledgeBase, Resolver, ResolverConfig};
//!
//! let index = FaqIndex::build(KnowledgeBase::sample());
//! let resolver = Resolver::new(&index, ResolverConfig::default());
//!
//! assert_eq!(
//!     resolver.resolve("How do I return an item?"),
//!     "You can return any product within 30 days of purchase."
//! );
//! ```
//!
//! The crate performs no I/O and owns no file formats. Loading knowledge
//! bases and settings is left to the caller.
//!
#![warn(missing_docs)]

pub mod index;
pub mod knowledge;
pub mod normalize;
pub mod resolver;
pub mod vocabulary;

pub use index::{build_index, FaqIndex};
pub use knowledge::{KnowledgeBase, KnowledgeEntry};
pub use normalize::{normalize, tokenize};
pub use resolver::{resolve, Match, Resolver, ResolverConfig, DEFAULT_FALLBACK_MESSAGE, DEFAULT_THRESHOLD};
pub use vocabulary::{TermStats, VocabularyModel, WeightVector, WeightingParams};
