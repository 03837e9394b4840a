//! # EduBot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout the EduBot application.
//! The assistant core itself (topic lookup, level adaptation, the conversation
//! store) never fails; errors only come from the edges: configuration files,
//! user-supplied level names, template rendering and terminal I/O.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `EdubotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if config.chat.response_delay_ms > MAX_RESPONSE_DELAY_MS {
//!     return Err(anyhow!(EdubotError::Config("delay too long".into())));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//!
//! // Pattern matching on error types
//! match "postgrad".parse::<Level>() {
//!     Err(EdubotError::InvalidLevel { value }) => println!("Unknown level {value}"),
//!     _ => {}
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the EduBot application.
#[derive(Error, Debug)]
pub enum EdubotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown student level '{value}'. Expected one of: middle, high, university.")]
    InvalidLevel { value: String },

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Terminal I/O error: {0}")]
    Io(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
