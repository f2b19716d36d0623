//! # FaqRS Text Normalizer
//!
//! File: engine/src/normalize.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Questions and queries go through the exact same normalization so that they
//! land in the same vector space:
//!
//! 1. Lower-case the text.
//! 2. Cut it into words at every character that is neither alphanumeric nor
//!    an underscore.
//! 3. Keep the words made only of ASCII letters; each one is a token.
//! 4. Re-join the tokens with single spaces.
//!
//! A run of letters glued to a digit, an underscore or a non-ASCII letter is
//! part of a larger word and is dropped whole: `"30days"`, `"snake_case"` and
//! `"café"` produce no tokens, while `"Return 30 days!"` becomes
//! `"return days"`. The transformation is lossy and idempotent.
//!

/// Normalizes raw text into a space-separated string of lower-case ASCII words.
///
/// Returns an empty string when the input contains no ASCII letters.
/// Never fails.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits already-normalized text into tokens.
///
/// The empty string yields zero tokens.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split(' ').filter(|t| !t.is_empty()).collect()
}
