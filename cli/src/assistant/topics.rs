//! # Topic Table
//!
//! File: cli/src/assistant/topics.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The fixed set of canned answers EduBot knows about, keyed by a lowercase
//! keyword. Lookup walks the table front to back and the first keyword found
//! inside the question wins, so the order of `TOPIC_TABLE` is part of its
//! behavior: a question mentioning both "gravity" and "mitosis" is answered
//! with the gravity template.
//!
//! Questions that match nothing get the generic template built by
//! [`fallback_sections`], which quotes the question back to the student.
//!

use super::sections::{Sections, SectionsTemplate};

/// A keyword and the answer it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    /// Lowercase keyword matched as a substring of the lowercased question.
    pub keyword: &'static str,
    pub template: SectionsTemplate,
}

impl Topic {
    /// The question suggested to students for this topic.
    pub fn sample_question(&self) -> String {
        format!("What is {}?", self.keyword)
    }
}

/// Known topics in lookup order.
pub const TOPIC_TABLE: [Topic; 3] = [
    Topic {
        keyword: "photosynthesis",
        template: SectionsTemplate {
            explanation: "Photosynthesis is the process plants use to make their own food using sunlight, water, and carbon dioxide. Think of it like a solar-powered kitchen inside every leaf — sunlight is the energy, the ingredients are water and carbon dioxide, and the 'meal' is sugar (glucose).",
            example: Some("When you see a green leaf in sunlight, it's literally 'cooking' its food! The green color comes from chlorophyll, which captures sunlight like a solar panel."),
            key_takeaway: "Plants use sunlight to create food and release oxygen, which we need to breathe.",
            next_step: "Would you like to learn about the chemical equation of photosynthesis, or explore this with simple experiments you can try?",
        },
    },
    Topic {
        keyword: "gravity",
        template: SectionsTemplate {
            explanation: "Gravity is a force that pulls objects toward each other. On Earth, it pulls everything toward the center of our planet. The more massive an object is, the stronger its gravitational pull.",
            example: Some("When you drop a ball, gravity pulls it down to Earth. The Moon orbits Earth because of gravity's pull, and Earth orbits the Sun for the same reason!"),
            key_takeaway: "Gravity is everywhere in the universe and keeps planets, moons, and stars in their orbits.",
            next_step: "Want to explore why astronauts float in space, or learn about how gravity affects different objects?",
        },
    },
    Topic {
        keyword: "mitosis",
        template: SectionsTemplate {
            explanation: "Mitosis is how cells divide to create two identical copies of themselves. It's like cellular photocopying! This process helps organisms grow, repair injuries, and replace old cells.",
            example: Some("When you get a cut, your skin heals through mitosis - cells near the wound divide to create new skin cells that fill in the gap."),
            key_takeaway: "Mitosis allows organisms to grow and repair themselves by creating identical copies of cells.",
            next_step: "Would you like to see the stages of mitosis, or learn how it differs from meiosis (the cell division for reproduction)?",
        },
    },
];

const FALLBACK_EXAMPLE: &str = "Think of this concept like building blocks - each part connects to create a bigger picture that helps us understand the world around us.";
const FALLBACK_TAKEAWAY: &str = "Every question you ask is a step forward in your learning journey!";
const FALLBACK_NEXT_STEP: &str = "Would you like me to explain this topic in more detail, or would you prefer to explore a related concept?";

/// Sections attached to the greeting that opens every conversation.
pub const WELCOME_SECTIONS: SectionsTemplate = SectionsTemplate {
    explanation: "I'm designed to help students of all levels understand complex topics through clear explanations, real-world examples, and encouraging guidance.",
    example: None,
    key_takeaway: "I'm here to support your learning journey with patience and enthusiasm!",
    next_step: "What topic would you like to explore today? Try asking about photosynthesis, gravity, mitosis, or any subject you're curious about!",
};

/// Content of the greeting message.
pub const WELCOME_CONTENT: &str =
    "Welcome! I'm your educational assistant, here to help you learn and explore new concepts.";

/// Returns the first topic whose keyword occurs in `question`, ignoring case.
pub fn find_topic(question: &str) -> Option<&'static Topic> {
    let lowered = question.to_lowercase();
    TOPIC_TABLE
        .iter()
        .find(|topic| lowered.contains(topic.keyword))
}

/// Generic answer for questions outside the table. `question` is quoted verbatim.
pub fn fallback_sections(question: &str) -> Sections {
    Sections {
        explanation: format!(
            "Great question about \"{}\"! This is an interesting topic that connects to many areas of learning. Let me break this down in a way that's clear and engaging.",
            question
        ),
        example: Some(FALLBACK_EXAMPLE.to_string()),
        key_takeaway: FALLBACK_TAKEAWAY.to_string(),
        next_step: FALLBACK_NEXT_STEP.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_each_topic_case_insensitively() {
        assert_eq!(find_topic("Explain PHOTOSYNTHESIS").unwrap().keyword, "photosynthesis");
        assert_eq!(find_topic("what is Gravity?").unwrap().keyword, "gravity");
        assert_eq!(find_topic("mitosis stages").unwrap().keyword, "mitosis");
    }

    #[test]
    fn matches_keyword_inside_longer_words() {
        assert_eq!(find_topic("antigravity boots").unwrap().keyword, "gravity");
    }

    #[test]
    fn first_table_entry_wins_on_multiple_matches() {
        let topic = find_topic("Does mitosis happen without gravity?").unwrap();
        assert_eq!(topic.keyword, "gravity");
        let topic = find_topic("mitosis, gravity and photosynthesis").unwrap();
        assert_eq!(topic.keyword, "photosynthesis");
    }

    #[test]
    fn unknown_question_has_no_topic() {
        assert!(find_topic("Why is the sky blue?").is_none());
        assert!(find_topic("").is_none());
    }

    #[test]
    fn fallback_quotes_the_question() {
        let sections = fallback_sections("Why is the sky blue?");
        assert!(sections
            .explanation
            .starts_with("Great question about \"Why is the sky blue?\"!"));
        assert_eq!(sections.example.as_deref(), Some(FALLBACK_EXAMPLE));
    }

    #[test]
    fn sample_questions() {
        let samples: Vec<String> = TOPIC_TABLE.iter().map(Topic::sample_question).collect();
        assert_eq!(
            samples,
            vec!["What is photosynthesis?", "What is gravity?", "What is mitosis?"]
        );
    }
}
