//! # Qabot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in
//! `cli/tests/` is compiled as its own test crate and runs the compiled
//! `qabot` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// # Get Qabot Command (`qabot_cmd`)
///
/// Creates an `assert_cmd::Command` for the `qabot` binary built for this
/// test run, with environment variables that would change its behaviour
/// removed. `HOME` and `XDG_CONFIG_HOME` point at an empty directory so the
/// developer's own `qabot/config.toml` is never read.
///
/// ## Panics
/// Panics if the `qabot` binary cannot be found via `Command::cargo_bin`.
pub fn qabot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("qabot").expect("Failed to find qabot binary for testing");
    let home = isolated_home();
    cmd.env_remove("QABOT_KNOWLEDGE_BASE")
        .env_remove("RUST_LOG")
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

/// A never-created directory under cargo's per-target scratch space.
pub fn isolated_home() -> PathBuf {
    Path::new(env!("CARGO_TARGET_TMPDIR")).join("qabot-empty-home")
}

/// # Chat In Directory (`chat_in`)
///
/// A `qabot` command running inside `dir` (so no project config from the
/// caller's tree is picked up) and using `dir/knowledge_base.json`.
pub fn chat_in(dir: &Path) -> Command {
    let mut cmd = qabot_cmd();
    cmd.current_dir(dir)
        .arg("--knowledge-base")
        .arg(dir.join("knowledge_base.json"));
    cmd
}
