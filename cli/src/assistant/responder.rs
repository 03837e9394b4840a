//! # Response Selector
//!
//! File: cli/src/assistant/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Maps a free-text question and a student level to a structured answer.
//! Selection is a substring lookup in the topic table with a generic fallback;
//! the level then rewrites the explanation.
//!
//! The function is total: every string and every level produces an answer,
//! and there are no side effects.
//!
//! ```rust,ignore
//! let sections = select_response("What is gravity?", Level::University);
//! assert!(sections.explanation.ends_with(UNIVERSITY_SUFFIX));
//! ```
//!

use super::level::Level;
use super::sections::Sections;
use super::topics;
use tracing::debug;

/// Sentence appended to explanations at the university level.
pub const UNIVERSITY_SUFFIX: &str =
    " This concept has broader implications in advanced studies and research applications.";

/// Word substitutions applied at the middle-school level, in order.
const MIDDLE_SUBSTITUTIONS: [(&str, &str); 2] = [("complex", "interesting"), ("utilize", "use")];

/// Builds the answer for `question` at `level`.
pub fn select_response(question: &str, level: Level) -> Sections {
    let mut sections = match topics::find_topic(question) {
        Some(topic) => {
            debug!("Question matched topic '{}'", topic.keyword);
            topic.template.to_sections()
        }
        None => {
            debug!("No topic matched, using fallback answer");
            topics::fallback_sections(question)
        }
    };
    sections.explanation = adapt_explanation(&sections.explanation, level);
    sections
}

/// Rewrites an explanation for `level`. Only the explanation is ever adapted.
pub fn adapt_explanation(explanation: &str, level: Level) -> String {
    match level {
        Level::Middle => MIDDLE_SUBSTITUTIONS
            .iter()
            .fold(explanation.to_string(), |text, (from, to)| {
                text.replace(from, to)
            }),
        Level::High => explanation.to_string(),
        Level::University => format!("{explanation}{UNIVERSITY_SUFFIX}"),
    }
}
