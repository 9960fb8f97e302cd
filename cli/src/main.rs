//! # Qabot Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Qabot CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Starting the interactive chat session
//!
//! Logs go to stderr so stdout carries only the conversation.
//!
//! ## Examples
//!
//! ```bash
//! # Chat using ./knowledge_base.json
//! qabot
//!
//! # Chat with debug logging, showing how each question was matched
//! qabot -vv
//! ```
//!
use clap::Parser;
use qabot::commands;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "qabot",
    about = "Qabot: a question/answer bot that learns from you",
    long_about = "Answers questions from a small JSON knowledge base, matching exact and\n\
                  near-identical questions. Unknown questions can be taught on the spot.\n\
                  Type 'quit' to leave the session.",
    version
)]
struct Cli {
    #[command(flatten)]
    chat: commands::chat::ChatArgs,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::chat::handle_chat(cli.chat) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
