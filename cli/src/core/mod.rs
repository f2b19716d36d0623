//! # FaqRS Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure the commands build on:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `knowledge`: Loading and validating knowledge-base files
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{FaqrsError, Result}; // For error handling
//! use crate::core::knowledge; // For loading the knowledge base
//! ```
//!
pub mod config;
pub mod error;
pub mod knowledge;
