//! # EduBot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`ask.rs`, `chat.rs`, ...).
//! Every command built here reads its configuration from a temporary file
//! passed through `EDUBOT_CONFIG`, so the developer's own user or project
//! configuration never leaks into test results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// Configuration used unless a test supplies its own: instant answers, no clock.
pub const FAST_CONFIG: &str = "[chat]\nresponse_delay_ms = 0\n\n[display]\nshow_timestamps = false\n";

/// # Get EduBot Command (`edubot_cmd`)
///
/// An `assert_cmd::Command` for the compiled `edubot` binary, configured with
/// [`FAST_CONFIG`].
///
/// The returned `TempDir` owns the config file and must be kept alive until
/// the command has run.
///
/// ## Panics
/// Panics if the binary cannot be found or the temp config cannot be written.
pub fn edubot_cmd() -> (Command, TempDir) {
    edubot_cmd_with_config(FAST_CONFIG)
}

/// Like [`edubot_cmd`] but with custom TOML configuration.
pub fn edubot_cmd_with_config(toml: &str) -> (Command, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir for config");
    let path = dir.path().join("edubot.toml");
    fs::write(&path, toml).expect("Failed to write test config");

    let mut cmd = Command::cargo_bin("edubot").expect("Failed to find edubot binary for testing");
    cmd.env("EDUBOT_CONFIG", &path).env_remove("RUST_LOG");
    (cmd, dir)
}
