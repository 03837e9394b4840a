//! # Structured Answers
//!
//! File: cli/src/assistant/sections.rs
//! Author: Christi Mahu
//!
//! Every reply EduBot gives is split into the same four parts. A `Sections`
//! value is built once by the responder and then attached to a bot message;
//! nothing mutates it after that point.

use serde::Serialize;

/// The four-part structured answer attached to bot messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sections {
    pub explanation: String,
    pub example: Option<String>,
    pub key_takeaway: String,
    pub next_step: String,
}

/// A canned answer compiled into the binary.
///
/// Templates are `'static` so the topic table can live in a `const` and be
/// shared without any allocation until a reply is actually produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionsTemplate {
    pub explanation: &'static str,
    pub example: Option<&'static str>,
    pub key_takeaway: &'static str,
    pub next_step: &'static str,
}

impl SectionsTemplate {
    /// Copies the template into an owned `Sections`.
    pub fn to_sections(&self) -> Sections {
        Sections {
            explanation: self.explanation.to_string(),
            example: self.example.map(str::to_string),
            key_takeaway: self.key_takeaway.to_string(),
            next_step: self.next_step.to_string(),
        }
    }
}
