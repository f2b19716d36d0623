//! # FaqRS Index
//!
//! File: engine/src/index.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `FaqIndex` is the frozen product of the indexing phase: the knowledge base
//! itself, the vocabulary fitted over its normalized questions, and one unit
//! length TF-IDF vector per question, in knowledge-base order.
//!
//! It is built once at startup and never mutated afterwards. Resolvers borrow
//! it, so its lifetime is explicit and there is no hidden shared state.
//!
//! ## Examples
//!
//! ```rust
//! use faqrs_engine::{FaqIndex, KnowledgeBase};
//!
//! let index = FaqIndex::build(KnowledgeBase::sample());
//! assert_eq!(index.len(), 6);
//! assert_eq!(index.document_vectors()[0].dimensions(), index.vocabulary().len());
//! ```
//!
use crate::knowledge::{KnowledgeBase, KnowledgeEntry};
use crate::normalize::{normalize, tokenize};
use crate::vocabulary::{VocabularyModel, WeightVector, WeightingParams};
use tracing::{debug, warn};

/// The knowledge base together with its fitted vocabulary and document vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct FaqIndex {
    knowledge_base: KnowledgeBase,
    vocabulary: VocabularyModel,
    document_vectors: Vec<WeightVector>,
}

impl FaqIndex {
    /// Indexes `knowledge_base` with the default weighting constants.
    pub fn build(knowledge_base: KnowledgeBase) -> Self {
        Self::build_with(knowledge_base, WeightingParams::default())
    }

    /// Indexes `knowledge_base` with explicit weighting constants.
    ///
    /// Never fails. Questions that normalize to the empty string get the
    /// zero vector and can never be matched.
    pub fn build_with(knowledge_base: KnowledgeBase, params: WeightingParams) -> Self {
        let normalized: Vec<String> = knowledge_base
            .entries()
            .iter()
            .map(|entry| normalize(&entry.question))
            .collect();
        let tokenized: Vec<Vec<&str>> = normalized.iter().map(|q| tokenize(q)).collect();

        for (i, tokens) in tokenized.iter().enumerate() {
            if tokens.is_empty() {
                warn!(
                    "Question #{} ({:?}) has no plain ASCII words and can never be matched.",
                    i,
                    knowledge_base.entries()[i].question
                );
            }
        }

        let vocabulary = VocabularyModel::fit(&tokenized, params);
        let document_vectors: Vec<WeightVector> = tokenized
            .iter()
            .map(|tokens| vocabulary.vectorize(tokens))
            .collect();

        debug!(
            "Indexed {} knowledge-base entries over a vocabulary of {} tokens.",
            knowledge_base.len(),
            vocabulary.len()
        );

        Self {
            knowledge_base,
            vocabulary,
            document_vectors,
        }
    }

    /// The indexed knowledge base.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// The indexed entries, in knowledge-base order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        self.knowledge_base.entries()
    }

    /// The fitted vocabulary.
    pub fn vocabulary(&self) -> &VocabularyModel {
        &self.vocabulary
    }

    /// One vector per entry, in knowledge-base order.
    pub fn document_vectors(&self) -> &[WeightVector] {
        &self.document_vectors
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.knowledge_base.len()
    }

    /// Whether the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.knowledge_base.is_empty()
    }
}

/// Builds the vocabulary and document vectors for an ordered list of entries.
///
/// Convenience wrapper around [`FaqIndex::build`] with the default constants.
pub fn build_index(entries: impl IntoIterator<Item = KnowledgeEntry>) -> FaqIndex {
    FaqIndex::build(entries.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_vectors_are_unit_length_or_zero() {
        let index = FaqIndex::build(KnowledgeBase::sample());
        assert_eq!(index.document_vectors().len(), index.len());
        for v in index.document_vectors() {
            assert_eq!(v.dimensions(), index.vocabulary().len());
            assert!((v.norm() - 1.0).abs() < 1e-9);
            assert!(v.weights().iter().all(|&(_, w)| w >= 0.0));
        }
    }

    #[test]
    fn sample_vocabulary_statistics() {
        let index = FaqIndex::build(KnowledgeBase::sample());
        let vocab = index.vocabulary();
        assert_eq!(vocab.document_count(), 6);
        assert_eq!(vocab.get("store").map(|s| s.document_frequency), Some(2));
        assert_eq!(vocab.get("hello").map(|s| s.document_frequency), Some(1));
        // "Hello" is normalized before fitting.
        assert!(!vocab.contains("Hello"));
    }

    #[test]
    fn empty_question_gets_zero_vector() {
        let index = build_index(vec![
            KnowledgeEntry::new("123 ???", "numbers"),
            KnowledgeEntry::new("store hours", "nine to nine"),
        ]);
        assert!(index.document_vectors()[0].is_zero());
        assert!(!index.document_vectors()[1].is_zero());
    }

    #[test]
    fn degenerate_knowledge_bases_do_not_fail() {
        let empty = FaqIndex::build(KnowledgeBase::default());
        assert!(empty.is_empty());
        assert!(empty.vocabulary().is_empty());

        let all_blank = build_index(vec![
            KnowledgeEntry::new("", "a"),
            KnowledgeEntry::new("!!!", "b"),
        ]);
        assert!(all_blank.vocabulary().is_empty());
        assert!(all_blank.document_vectors().iter().all(WeightVector::is_zero));
    }

    #[test]
    fn building_twice_is_bit_identical() {
        let a = FaqIndex::build(KnowledgeBase::sample());
        let b = FaqIndex::build(KnowledgeBase::sample());
        assert_eq!(a, b);
        for (va, vb) in a.document_vectors().iter().zip(b.document_vectors()) {
            for (&(ia, wa), &(ib, wb)) in va.weights().iter().zip(vb.weights()) {
                assert_eq!(ia, ib);
                assert_eq!(wa.to_bits(), wb.to_bits());
            }
        }
    }

    fn two_store_questions(params: WeightingParams) -> FaqIndex {
        FaqIndex::build_with(
            KnowledgeBase::new(vec![
                KnowledgeEntry::new("store hours", "nine to nine"),
                KnowledgeEntry::new("store location", "MG Road"),
            ]),
            params,
        )
    }

    #[test]
    fn custom_params_reach_the_vectors() {
        let params = WeightingParams {
            idf_smoothing: 0.5,
            idf_offset: 0.0,
        };
        let index = two_store_questions(params);
        let vocab = index.vocabulary();
        assert_eq!(vocab.params(), params);

        let store = vocab.get("store").unwrap();
        let hours = vocab.get("hours").unwrap();
        // A token in every question has ln(1) = 0 and no offset to lift it.
        assert_eq!(vocab.idf(store.index), Some(0.0));
        let hours_idf = (2.5_f64 / 1.5).ln();
        assert!((vocab.idf(hours.index).unwrap() - hours_idf).abs() < 1e-12);

        let doc = &index.document_vectors()[0];
        assert_eq!(doc.get(store.index), 0.0);
        assert!((doc.get(hours.index) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn default_params_weight_shared_tokens() {
        let index = two_store_questions(WeightingParams::default());
        let vocab = index.vocabulary();
        let store = vocab.get("store").unwrap();
        let hours = vocab.get("hours").unwrap();

        let store_w = 0.5 * WeightingParams::default().idf(2, 2);
        let hours_w = 0.5 * WeightingParams::default().idf(2, 1);
        let norm = (store_w * store_w + hours_w * hours_w).sqrt();

        let doc = &index.document_vectors()[0];
        assert!((doc.get(store.index) - store_w / norm).abs() < 1e-12);
        assert!((doc.get(hours.index) - hours_w / norm).abs() < 1e-12);
    }
}
