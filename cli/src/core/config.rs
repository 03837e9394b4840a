//! # EduBot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module handles loading, merging, and validating EduBot's configuration.
//! It supports a multi-level approach that combines defaults, user settings,
//! and project-specific overrides, with command-line flags applied on top by
//! the caller.
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file given with `--config` / `EDUBOT_CONFIG` (replaces 2 and 3)
//! 2. Project-specific `.edubot.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/edubot/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [chat]
//! default_level = "middle"
//! response_delay_ms = 500
//!
//! [display]
//! assistant_name = "Study Buddy"
//! show_timestamps = false
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config(None)?;
//! let delay = cfg.chat.response_delay();
//! ```
//!
use crate::assistant::Level;
use crate::core::error::{EdubotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::time::Duration;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Largest accepted `response_delay_ms`.
pub const MAX_RESPONSE_DELAY_MS: u64 = 60_000;

const PROJECT_CONFIG_FILENAME: &str = ".edubot.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Settings that affect how questions are answered.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Level new sessions start at.
    #[serde(default)]
    pub default_level: Level,
    /// Pause before each answer appears, in milliseconds.
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,
    /// Open every conversation with the assistant's greeting.
    #[serde(default = "default_true")]
    pub show_welcome: bool,
}

/// Settings that only affect terminal output.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
}

impl ChatConfig {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_level: Level::default(),
            response_delay_ms: default_response_delay_ms(),
            show_welcome: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            assistant_name: default_assistant_name(),
            show_timestamps: true,
        }
    }
}

fn default_response_delay_ms() -> u64 {
    1000
}
fn default_assistant_name() -> String {
    "EduBot Assistant".to_string()
}
fn default_true() -> bool {
    true
}

/// Loads the effective configuration.
///
/// When `explicit` is set only that file is read and it must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("dev", "EduBot", "edubot") {
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
        debug!("No project configuration file (.edubot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the root looking for `.edubot.toml`.
/// A `.git` directory marks the project root and ends the search.
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

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let mut merged = user;

    if project_cfg.chat.default_level != defaults.chat.default_level {
        merged.chat.default_level = project_cfg.chat.default_level;
    }
    if project_cfg.chat.response_delay_ms != defaults.chat.response_delay_ms {
        merged.chat.response_delay_ms = project_cfg.chat.response_delay_ms;
    }
    if project_cfg.chat.show_welcome != defaults.chat.show_welcome {
        merged.chat.show_welcome = project_cfg.chat.show_welcome;
    }
    if project_cfg.display.assistant_name != defaults.display.assistant_name {
        merged.display.assistant_name = project_cfg.display.assistant_name;
    }
    if project_cfg.display.show_timestamps != defaults.display.show_timestamps {
        merged.display.show_timestamps = project_cfg.display.show_timestamps;
    }
    merged
}

/// Checks values serde cannot.
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if config.chat.response_delay_ms > MAX_RESPONSE_DELAY_MS {
        return Err(anyhow!(EdubotError::Config(format!(
            "response_delay_ms = {} exceeds the maximum of {} ms.",
            config.chat.response_delay_ms, MAX_RESPONSE_DELAY_MS
        ))));
    }
    if config.display.assistant_name.trim().is_empty() {
        return Err(anyhow!(EdubotError::Config(
            "assistant_name cannot be empty.".to_string()
        )));
    }
    Ok(())
}
