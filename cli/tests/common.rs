//! # FaqRS CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and builds its commands through these functions so
//! that every run is isolated from the developer's own configuration.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// # Get FaqRS Command (`faqrs_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `faqrs` binary, running
/// inside `workdir` with `HOME` and `XDG_CONFIG_HOME` pointed into it so no
/// user or project configuration leaks into the test.
///
/// ## Panics
/// Panics if the `faqrs` binary cannot be found via `Command::cargo_bin`.
pub fn faqrs_cmd(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("faqrs").expect("Failed to find faqrs binary for testing");
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env_remove("FAQRS_KB")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes a knowledge-base TOML file with the given entries and returns its path.
pub fn write_knowledge_base(dir: &Path, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let mut content = String::new();
    for (question, answer) in entries {
        content.push_str(&format!(
            "[[entries]]\nquestion = {:?}\nanswer = {:?}\n\n",
            question, answer
        ));
    }
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write knowledge base fixture");
    path
}
