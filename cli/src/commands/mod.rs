//! # EduBot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the EduBot CLI and the
//! global options they share.
//!
//! ## Commands
//!
//! - `chat`: Interactive conversation with the assistant
//! - `ask`: One-shot question, prints the answer and exits
//! - `topics`: Lists the topics the assistant knows about
//!
//! Each command defines its own arguments struct and handler function.
//! `chat` and `ask` receive the effective [`Config`], built by
//! [`effective_config`] from the config files and the global flags.
//!

/// One-shot question command.
pub mod ask;
/// Interactive chat command and its slash-command parser.
pub mod chat;
/// Topic listing command.
pub mod topics;

use crate::assistant::Level;
use crate::core::config::{self, Config};
use crate::core::error::Result;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// # Global Options (`GlobalArgs`)
///
/// Flags accepted before or after any subcommand. Each one overrides the
/// matching value from the configuration files.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Read configuration from this file only, skipping user and project config discovery.
    #[arg(long, env = "EDUBOT_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Delay before each answer appears, in milliseconds.
    #[arg(long, global = true, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Student level to start at (middle, high or university).
    #[arg(long, short = 'l', global = true, value_parser = Level::from_str)]
    pub level: Option<Level>,
}

/// # Effective Configuration (`effective_config`)
///
/// Loads the configuration files and applies the global flags on top.
/// The result is validated again because the flags can push values out of range.
pub fn effective_config(global: &GlobalArgs) -> Result<Config> {
    let mut cfg = config::load_config(global.config.as_deref())
        .context("Failed to load EduBot configuration")?;

    if let Some(delay_ms) = global.delay_ms {
        debug!("Overriding response delay with --delay-ms {}", delay_ms);
        cfg.chat.response_delay_ms = delay_ms;
    }
    if let Some(level) = global.level {
        debug!("Overriding starting level with --level {}", level);
        cfg.chat.default_level = level;
    }

    config::validate_config(&cfg).context("Invalid command-line overrides")?;
    Ok(cfg)
}
