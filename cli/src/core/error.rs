//! # FaqRS Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used by the FaqRS command-line front
//! end. The matching engine itself never fails; everything that can go wrong
//! happens at the edges, while reading configuration and knowledge-base files.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `FaqrsError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !(0.0..=1.0).contains(&threshold) {
//!     return Err(anyhow!(FaqrsError::Config(format!("Invalid threshold: {}", threshold))));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read knowledge base: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the FaqRS application.
#[derive(Error, Debug)]
pub enum FaqrsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
