//! # EduBot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure components that the chat logic
//! sits on: configuration, error management, and templating.
//!
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `templating`: Terminal rendering of chat messages
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{EdubotError, Result}; // For error handling
//! use crate::core::templating::MessageRenderer; // For printing messages
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
