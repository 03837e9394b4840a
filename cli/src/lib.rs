//! # EduBot Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! EduBot is a terminal learning companion. A student asks a question, and
//! after a short pause the assistant answers with a four-part explanation
//! phrased for the student's level (middle school, high school or university).
//!
//! The library exposes the modules behind the `edubot` binary so they can be
//! exercised from the integration tests in `tests/`:
//!
//! - `assistant`: Topic table, levels and the response selector
//! - `conversation`: Messages, the append-only store and the submission flow
//! - `core`: Configuration, errors and message rendering
//! - `commands`: The `chat`, `ask` and `topics` command handlers
//!

pub mod assistant;
pub mod commands;
pub mod conversation;
pub mod core;
