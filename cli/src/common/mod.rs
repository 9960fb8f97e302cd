//! # Qabot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Root of the shared utility modules. Keeps cross-cutting helpers apart from
//! the interactive command (`commands::`), the question/answer domain
//! (`knowledge::`) and core infrastructure (`core::`).
//!
//! - **`fs`**: File reading and atomic writing used by the knowledge base store.
//!
pub mod fs;
