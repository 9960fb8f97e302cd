//! # Qabot Library
//!
//! File: cli/src/lib.rs
//!
//! Exposes the modules behind the `qabot` binary so that `main.rs` and the
//! integration tests in `tests/` share one implementation.
//!
//! - `commands`: The interactive chat command and its session loop
//! - `common`: Shared filesystem helpers
//! - `core`: Configuration and error types
//! - `knowledge`: The question/answer model, its JSON store, and the matcher
//!
pub mod commands;
pub mod common;
pub mod core;
pub mod knowledge;
