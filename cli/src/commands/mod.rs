//! # Qabot Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Command implementations reachable from the entry point (`main.rs`). Each
//! command defines its own clap arguments struct and a `handle_*` function.
//!
//! - `chat`: The interactive question/answer session (the default and only command)
//!

/// Interactive question/answer session: `ChatArgs`, `handle_chat` and the `ChatSession` loop.
pub mod chat;
