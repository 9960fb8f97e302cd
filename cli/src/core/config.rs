//! # Qabot Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for Qabot, handling loading,
//! merging, validation, and access to configuration data. Only two settings
//! exist today: where the knowledge base file lives and how similar an input
//! must be to a known question before it counts as a fuzzy match.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (`--knowledge-base`, `--cutoff`) and `QABOT_KNOWLEDGE_BASE`
//! 2. Project-specific `.qabot.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/qabot/config.toml`
//! 4. Default values defined in the code
//!
//! Paths are expanded (`~` to home directory) and the merged result is
//! validated before it is handed to the chat session.
//!
//! ## Examples
//!
//! ```toml
//! [knowledge_base]
//! path = "~/notes/knowledge_base.json"
//!
//! [matching]
//! cutoff = 0.75
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config(&ConfigOverrides::default())?;
//! let kb_path = cfg.knowledge_base_path();
//! let matcher = Matcher::new(cfg.matching.cutoff);
//! ```
//!
use crate::core::error::{QabotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub knowledge_base: KnowledgeBaseConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
}

/// Where the question/answer pairs are persisted.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeBaseConfig {
    /// Path of the JSON knowledge base file (can use ~). Will be expanded.
    #[serde(default = "default_knowledge_base_path")]
    pub path: String,
}

/// Tuning for the question matcher.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MatchingConfig {
    /// Minimum similarity ratio (0.0 to 1.0) for a fuzzy match.
    #[serde(default = "default_cutoff")]
    pub cutoff: f64,
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            path: default_knowledge_base_path(),
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            cutoff: default_cutoff(),
        }
    }
}

impl Config {
    /// The knowledge base location as a path.
    pub fn knowledge_base_path(&self) -> PathBuf {
        PathBuf::from(&self.knowledge_base.path)
    }
}

/// Values supplied on the command line, applied on top of the file-based layers.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub knowledge_base: Option<PathBuf>,
    pub cutoff: Option<f64>,
}

fn default_knowledge_base_path() -> String {
    "knowledge_base.json".to_string()
}
fn default_cutoff() -> f64 {
    crate::knowledge::matcher::DEFAULT_CUTOFF
}

const PROJECT_CONFIG_FILENAME: &str = ".qabot.toml";

/// Loads the user and project layers, applies `overrides`, expands paths and
/// validates the result.
pub fn load_config(overrides: &ConfigOverrides) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    apply_overrides(&mut merged_config, overrides);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Qabot", "qabot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.qabot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.qabot.toml`,
/// stopping at the first directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.knowledge_base.path = if project_cfg.knowledge_base.path != default_knowledge_base_path()
    {
        project_cfg.knowledge_base.path
    } else {
        user.knowledge_base.path
    };
    merged.matching.cutoff = if project_cfg.matching.cutoff != default_cutoff() {
        project_cfg.matching.cutoff
    } else {
        user.matching.cutoff
    };
    merged
}

fn apply_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(path) = &overrides.knowledge_base {
        debug!("Knowledge base path overridden: {}", path.display());
        config.knowledge_base.path = path.to_string_lossy().into_owned();
    }
    if let Some(cutoff) = overrides.cutoff {
        debug!("Match cutoff overridden: {}", cutoff);
        config.matching.cutoff = cutoff;
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.knowledge_base.path = shellexpand::tilde(&config.knowledge_base.path).into_owned();
    debug!(
        "Expanded knowledge base path: {}",
        config.knowledge_base.path
    );
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    let cutoff = config.matching.cutoff;
    if !(0.0..=1.0).contains(&cutoff) {
        return Err(anyhow!(QabotError::Config(format!(
            "Match cutoff must be between 0.0 and 1.0, got {}.",
            cutoff
        ))));
    }
    if config.knowledge_base.path.trim().is_empty() {
        return Err(anyhow!(QabotError::Config(
            "Knowledge base path cannot be empty.".to_string()
        )));
    }
    let kb_path = config.knowledge_base_path();
    if kb_path.is_dir() {
        return Err(anyhow!(QabotError::Config(format!(
            "Knowledge base path '{}' is a directory, expected a file.",
            kb_path.display()
        ))));
    }
    info!("Configuration validation successful.");
    Ok(())
}
