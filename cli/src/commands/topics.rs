//! # EduBot Topics Command
//!
//! File: cli/src/commands/topics.rs
//! Author: Christi Mahu
//!
//! Lists the topics the assistant has prepared answers for, each with a
//! question the student can copy.
//!
//! ```text
//! Try asking about:
//!
//!   photosynthesis   What is photosynthesis?
//!   gravity          What is gravity?
//!   mitosis          What is mitosis?
//! ```
//!
use crate::assistant::topics::TOPIC_TABLE;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

/// Arguments for `edubot topics`. None yet.
#[derive(Parser, Debug)]
pub struct TopicsArgs {}

pub async fn handle_topics(_args: TopicsArgs) -> Result<()> {
    info!("Handling topics command...");
    println!("{}", topics_listing());
    Ok(())
}

/// The listing printed by `edubot topics` and the chat `/topics` command.
pub fn topics_listing() -> String {
    let width = TOPIC_TABLE
        .iter()
        .map(|topic| topic.keyword.len())
        .max()
        .unwrap_or(0);
    let mut out = String::from("Try asking about:\n");
    for topic in TOPIC_TABLE.iter() {
        out.push_str(&format!(
            "\n  {:<width$}   {}",
            topic.keyword,
            topic.sample_question(),
            width = width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_has_every_topic_in_table_order() {
        let listing = topics_listing();
        let photo = listing.find("photosynthesis").unwrap();
        let gravity = listing.find("gravity").unwrap();
        let mitosis = listing.find("mitosis").unwrap();
        assert!(photo < gravity && gravity < mitosis);
        assert!(listing.contains("What is gravity?"));
    }
}
