//! # FaqRS Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared building blocks used by more than one command, kept apart from
//! command-specific logic (`commands::`) and core infrastructure (`core::`).
//!
//! - **`assistant`**: Loads configuration and the knowledge base, builds the
//!   index once, and hands out resolvers.
//! - **`ui`**: Small helpers for terminal output (section headers, truncation).
//!
pub mod assistant;
pub mod ui;
