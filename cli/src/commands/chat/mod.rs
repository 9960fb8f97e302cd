//! # Qabot Chat Command
//!
//! File: cli/src/commands/chat/mod.rs
//!
//! ## Overview
//!
//! Running `qabot` starts an interactive question/answer session on the
//! terminal. This module owns the arguments for it and the handler that wires
//! configuration, the knowledge base and the console together.
//!
//! ## Architecture
//!
//! 1. Resolve configuration (`core::config`), with flags taking precedence.
//! 2. Load the knowledge base, starting empty if the file is missing or broken.
//! 3. Hand stdin/stdout to a `ChatSession` until the user types `quit`.
//!
//! ## Examples
//!
//! ```bash
//! # Use the default ./knowledge_base.json
//! qabot
//!
//! # Keep answers somewhere else and be stricter about typos
//! qabot --knowledge-base ~/notes/answers.json --cutoff 0.9
//! ```
//!
pub mod session;

use crate::core::config::{self, ConfigOverrides};
use crate::core::error::Result;
use crate::knowledge::{store, Matcher};
use anyhow::Context;
use clap::Args;
use session::ChatSession;
use std::io;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the interactive session.
#[derive(Args, Debug, Default)]
pub struct ChatArgs {
    /// JSON file holding the learned questions and answers
    #[arg(short = 'k', long, env = "QABOT_KNOWLEDGE_BASE", value_name = "PATH")]
    pub knowledge_base: Option<PathBuf>,

    /// Minimum similarity (0.0 to 1.0) for a fuzzy match [default: 0.8]
    #[arg(long, value_name = "RATIO")]
    pub cutoff: Option<f64>,
}

impl ChatArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            knowledge_base: self.knowledge_base.clone(),
            cutoff: self.cutoff,
        }
    }
}

/// Starts a chat session on the terminal and returns when the user quits.
pub fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command...");

    let cfg = config::load_config(&args.overrides()).context("Failed to load Qabot configuration")?;
    let store_path = cfg.knowledge_base_path();
    info!("Using knowledge base at {}", store_path.display());

    let knowledge_base = store::load(&store_path);
    let mut session = ChatSession::new(
        knowledge_base,
        store_path,
        Matcher::new(cfg.matching.cutoff),
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(&mut stdin.lock(), &mut stdout.lock())
}
