//! # Qabot Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout Qabot. It follows the
//! usual split for a CLI application:
//! - `QabotError`: a `thiserror` enum naming the failures callers may want to
//!   match on (a missing or corrupt knowledge base, bad configuration).
//! - `Result<T>`: an alias for `anyhow::Result<T>` so any error can be
//!   propagated with `?` and enriched with `.context(...)`.
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Distinguish a missing knowledge base from other load failures
//! match store::try_load(path) {
//!     Ok(kb) => kb,
//!     Err(e) if matches!(e.downcast_ref::<QabotError>(), Some(QabotError::KnowledgeBaseMissing { .. })) => {
//!         KnowledgeBase::default()
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the Qabot application.
#[derive(Error, Debug)]
pub enum QabotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Knowledge base '{path}' does not exist.")]
    KnowledgeBaseMissing { path: String },

    #[error("Knowledge base '{path}' is not valid: {source}")]
    MalformedKnowledgeBase {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Console I/O failed: {source}")]
    Console {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
