//! # Knowledge Base Store
//!
//! File: cli/src/knowledge/store.rs
//!
//! ## Overview
//!
//! Loads and saves the knowledge base as pretty-printed JSON. Each direction
//! comes in two flavours:
//!
//! - `try_load` / `try_save` return errors to the caller.
//! - `load` / `save` are what the chat session uses. A missing or unreadable
//!   file yields an empty knowledge base, and a failed save only logs a
//!   warning, so neither stops a conversation.
//!
//! Saving always rewrites the entire file.
//!
use super::model::KnowledgeBase;
use crate::common::fs::io;
use crate::core::error::{QabotError, Result};
use anyhow::Context;
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads the knowledge base at `path`.
///
/// # Errors
///
/// - `QabotError::KnowledgeBaseMissing` if nothing exists at `path`.
/// - `QabotError::MalformedKnowledgeBase` if the content is not a valid knowledge base document.
/// - Any I/O error raised while reading.
pub fn try_load(path: &Path) -> Result<KnowledgeBase> {
    if !path.exists() {
        anyhow::bail!(QabotError::KnowledgeBaseMissing {
            path: path.display().to_string(),
        });
    }

    let raw = io::read_file_to_string(path)?;
    let knowledge_base: KnowledgeBase =
        serde_json::from_str(&raw).map_err(|source| QabotError::MalformedKnowledgeBase {
            path: path.display().to_string(),
            source,
        })?;

    info!(
        "Loaded {} question(s) from {}",
        knowledge_base.len(),
        path.display()
    );
    Ok(knowledge_base)
}

/// Reads the knowledge base at `path`, falling back to an empty one.
pub fn load(path: &Path) -> KnowledgeBase {
    match try_load(path) {
        Ok(knowledge_base) => knowledge_base,
        Err(e) => {
            warn!("Error loading knowledge base: {:#}", e);
            KnowledgeBase::default()
        }
    }
}

/// Writes `knowledge_base` to `path`, replacing any previous content.
pub fn try_save(path: &Path, knowledge_base: &KnowledgeBase) -> Result<()> {
    let json = serde_json::to_string_pretty(knowledge_base)
        .context("Failed to serialize knowledge base")?;
    io::write_string_atomically(path, &json)
        .with_context(|| format!("Failed to save knowledge base to {}", path.display()))?;
    debug!(
        "Saved {} question(s) to {}",
        knowledge_base.len(),
        path.display()
    );
    Ok(())
}

/// Writes `knowledge_base` to `path`, logging instead of failing.
pub fn save(path: &Path, knowledge_base: &KnowledgeBase) {
    if let Err(e) = try_save(path, knowledge_base) {
        warn!("Error saving knowledge base: {:#}", e);
    }
}
