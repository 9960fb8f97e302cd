//! # Qabot Knowledge Base (`knowledge`)
//!
//! File: cli/src/knowledge/mod.rs
//!
//! ## Overview
//!
//! Everything the bot knows and how it looks things up:
//!
//! - **`model`**: `QaEntry` and the ordered `KnowledgeBase` collection.
//! - **`store`**: JSON persistence of the knowledge base to a single file.
//! - **`matcher`**: Exact then fuzzy resolution of user input to a known question, and answer lookup.
//! - **`similarity`**: The sequence similarity ratio used by the fuzzy step.
//!
//! ## Usage
//!
//! ```rust
//! use qabot::knowledge::{matcher, KnowledgeBase, Matcher};
//!
//! let mut kb = KnowledgeBase::default();
//! kb.learn("What is Rust?", "A systems programming language.");
//!
//! let questions: Vec<&str> = kb.questions().collect();
//! let question = Matcher::default().find_best_match("What is Rust", &questions);
//! assert_eq!(question, Some("What is Rust?"));
//! assert_eq!(
//!     matcher::answer_for("what is rust?", &kb),
//!     Some("A systems programming language.")
//! );
//! ```
//!
pub mod matcher;
pub mod model;
pub mod similarity;
pub mod store;

pub use matcher::Matcher;
pub use model::{KnowledgeBase, QaEntry};
