//! # FaqRS Vocabulary and Weighting
//!
//! File: engine/src/vocabulary.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module holds the term-weighting model fitted over the knowledge-base
//! questions and the sparse vectors it produces.
//!
//! - `VocabularyModel`: maps every distinct token to its document frequency
//!   and its coordinate in the vector space, and stores the frozen IDF weight
//!   for each coordinate.
//! - `WeightVector`: a sparse, non-negative vector over that space.
//! - `WeightingParams`: the smoothing constants of the IDF formula.
//!
//! ## Weighting
//!
//! For token `t` in document `d` out of `N` documents:
//!
//! ```text
//! tf(t, d)  = count(t, d) / tokens(d)              (0 for an empty document)
//! idf(t)    = ln((s + N) / (s + df(t))) + o        (s = idf_smoothing, o = idf_offset)
//! w(t, d)   = tf(t, d) * idf(t)
//! ```
//!
//! With the defaults `s = 1`, `o = 1` this is the usual smoothed IDF
//! `ln((1 + N) / (1 + df)) + 1`, which stays positive even for a token that
//! appears in every document.
//!
//! Coordinates are assigned in lexicographic token order and all
//! accumulation happens in a fixed order, so fitting the same ordered corpus
//! always produces bit-identical models.
//!
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// Smoothing constants for the IDF formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightingParams {
    /// Added to both the document count and the document frequency inside the logarithm.
    pub idf_smoothing: f64,
    /// Added to the logarithm so no vocabulary token gets a zero weight.
    pub idf_offset: f64,
}

impl Default for WeightingParams {
    fn default() -> Self {
        Self {
            idf_smoothing: 1.0,
            idf_offset: 1.0,
        }
    }
}

impl WeightingParams {
    /// Inverse document frequency of a token found in `document_frequency` of `document_count` documents.
    pub fn idf(&self, document_count: usize, document_frequency: usize) -> f64 {
        let n = document_count as f64;
        let df = document_frequency as f64;
        ((self.idf_smoothing + n) / (self.idf_smoothing + df)).ln() + self.idf_offset
    }
}

/// Per-token statistics stored in the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermStats {
    /// Number of documents containing the token at least once.
    pub document_frequency: usize,
    /// Coordinate of the token in the vector space.
    pub index: usize,
}

/// Token statistics and IDF weights fitted over a corpus of token lists.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyModel {
    terms: BTreeMap<String, TermStats>,
    idf: Vec<f64>,
    document_count: usize,
    params: WeightingParams,
}

impl VocabularyModel {
    /// Fits the vocabulary over already-tokenized documents.
    ///
    /// An empty corpus, or one made only of empty documents, yields an empty
    /// vocabulary. That is a valid model; every vector it produces is zero.
    pub fn fit<S: AsRef<str>>(documents: &[Vec<S>], params: WeightingParams) -> Self {
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in documents {
            let unique: BTreeSet<&str> = tokens.iter().map(|t| t.as_ref()).collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let document_count = documents.len();
        let mut terms = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (token, df)) in document_frequency.into_iter().enumerate() {
            let weight = params.idf(document_count, df);
            trace!("vocabulary[{}] = {:?} (df={}, idf={:.6})", index, token, df, weight);
            idf.push(weight);
            terms.insert(
                token.to_string(),
                TermStats {
                    document_frequency: df,
                    index,
                },
            );
        }

        Self {
            terms,
            idf,
            document_count,
            params,
        }
    }

    /// Number of distinct tokens, which is also the dimensionality of every vector.
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    /// Whether the vocabulary has no tokens.
    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    /// Number of documents the model was fitted on.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// The weighting constants the model was fitted with.
    pub fn params(&self) -> WeightingParams {
        self.params
    }

    /// Statistics for `token`, or `None` if it is out of vocabulary.
    pub fn get(&self, token: &str) -> Option<&TermStats> {
        self.terms.get(token)
    }

    /// Whether `token` is part of the vocabulary.
    pub fn contains(&self, token: &str) -> bool {
        self.terms.contains_key(token)
    }

    /// IDF weight of the coordinate `index`.
    pub fn idf(&self, index: usize) -> Option<f64> {
        self.idf.get(index).copied()
    }

    /// Iterates over `(token, stats)` in coordinate order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &TermStats)> {
        self.terms.iter().map(|(t, s)| (t.as_str(), s))
    }

    /// Projects a token list into the vector space and L2-normalizes the result.
    ///
    /// Term frequency is taken over all of `tokens`, including tokens the
    /// vocabulary does not know; unknown tokens contribute no weight.
    pub fn vectorize<S: AsRef<str>>(&self, tokens: &[S]) -> WeightVector {
        let dimensions = self.len();
        if tokens.is_empty() {
            return WeightVector::zeros(dimensions);
        }

        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for token in tokens {
            if let Some(stats) = self.terms.get(token.as_ref()) {
                *counts.entry(stats.index).or_insert(0) += 1;
            }
        }

        let total = tokens.len() as f64;
        let weights = counts
            .into_iter()
            .map(|(index, count)| (index, (count as f64 / total) * self.idf[index]))
            .filter(|&(_, weight)| weight != 0.0)
            .collect();

        WeightVector {
            dimensions,
            weights,
        }
        .l2_normalized()
    }
}

/// A sparse vector of non-negative weights.
///
/// Only non-zero coordinates are stored, sorted by index.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector {
    dimensions: usize,
    weights: Vec<(usize, f64)>,
}

impl WeightVector {
    /// The zero vector of the given dimensionality.
    pub fn zeros(dimensions: usize) -> Self {
        Self {
            dimensions,
            weights: Vec::new(),
        }
    }

    /// Builds a vector from `(index, weight)` pairs.
    ///
    /// Pairs are sorted by index; zero weights and indices outside
    /// `dimensions` are dropped. Weights are expected to be non-negative.
    pub fn from_pairs(dimensions: usize, pairs: impl IntoIterator<Item = (usize, f64)>) -> Self {
        let mut weights: Vec<(usize, f64)> = pairs
            .into_iter()
            .filter(|&(index, weight)| index < dimensions && weight != 0.0)
            .collect();
        weights.sort_by_key(|&(index, _)| index);
        Self {
            dimensions,
            weights,
        }
    }

    /// Dimensionality of the space this vector lives in.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Non-zero coordinates, sorted by index.
    pub fn weights(&self) -> &[(usize, f64)] {
        &self.weights
    }

    /// Weight at coordinate `index` (zero when not stored).
    pub fn get(&self, index: usize) -> f64 {
        self.weights
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.weights[pos].1)
            .unwrap_or(0.0)
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Whether every coordinate is zero.
    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|&(_, w)| w == 0.0)
    }

    /// Dot product. For two unit vectors this is their cosine similarity.
    pub fn dot(&self, other: &WeightVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.weights.len() && j < other.weights.len() {
            let (a_idx, a_w) = self.weights[i];
            let (b_idx, b_w) = other.weights[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Scales the vector to unit length. The zero vector stays zero.
    pub fn l2_normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in self.weights.iter_mut() {
                *w /= norm;
            }
        }
        self
    }
}
