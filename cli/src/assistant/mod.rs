//! # EduBot Assistant Core
//!
//! File: cli/src/assistant/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The question-answering side of EduBot. None of it touches the terminal,
//! the clock, or the filesystem.
//!
//! - `level`: The student levels and their parsing/labels
//! - `sections`: The four-part answer type and its static template form
//! - `topics`: The canned topic table, fallback answer and welcome text
//! - `responder`: Topic selection plus level adaptation
//!

pub mod level;
pub mod responder;
pub mod sections;
pub mod topics;

pub use level::Level;
pub use responder::select_response;
pub use sections::Sections;
