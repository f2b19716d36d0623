//! # FaqRS UI Utilities (`common::ui`)
//!
//! File: cli/src/common/ui.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Formatting helpers for the plain-text output of `faqrs list` and
//! `faqrs explain`. They only build strings; callers decide where to print.
//!

/// Width of the horizontal rules framing a section header.
const RULE_WIDTH: usize = 70;

/// Renders a section title between two horizontal rules.
pub fn section_header(title: &str) -> String {
    let rule = "━".repeat(RULE_WIDTH);
    format!("{rule}\n {title}\n{rule}")
}

/// Shortens `text` to at most `max_chars` characters, ending with `…` when cut.
///
/// Counts `char`s, not bytes, so multi-byte text is never split mid-character.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut shortened: String = text.chars().take(max_chars - 1).collect();
    shortened.push('…');
    shortened
}
