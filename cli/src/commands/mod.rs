//! # FaqRS Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the FaqRS CLI and makes
//! them accessible to the main application entry point (`main.rs`).
//!
//! ## Commands
//!
//! - `ask`: Answer one question and exit
//! - `chat`: Interactive question/answer loop on the terminal
//! - `explain`: Show normalization, recognized tokens and ranked scores for a query
//! - `list`: Print the loaded knowledge base
//!
//! Each command defines its own arguments structure and handler function.
//! Handlers receive the global `Overrides` parsed in `main.rs`.
//!

/// Answers a single question given on the command line.
pub mod ask;
/// Runs the line-based conversation loop.
pub mod chat;
/// Diagnostic report of how a query is scored.
pub mod explain;
/// Prints the knowledge base.
pub mod list;
