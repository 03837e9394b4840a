//! # EduBot CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Runs `edubot ask` end to end and checks the rendered answer for each level.
//!

mod common;
use common::*;
use edubot::assistant::responder::UNIVERSITY_SUFFIX;
use edubot::assistant::topics::TOPIC_TABLE;
use predicates::prelude::*;

#[test]
fn test_ask_gravity_at_high_level() {
    let gravity = &TOPIC_TABLE[1].template;
    let (mut cmd, _dir) = edubot_cmd();
    cmd.args(["ask", "What", "is", "gravity?", "--level", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EduBot Assistant [High Level]"))
        .stdout(predicate::str::contains("Here's what I found for you:"))
        .stdout(predicate::str::contains(format!(
            "Explanation: {}\n",
            gravity.explanation
        )))
        .stdout(predicate::str::contains(format!(
            "Example: {}",
            gravity.example.unwrap()
        )))
        .stdout(predicate::str::contains(gravity.key_takeaway))
        .stdout(predicate::str::contains(gravity.next_step));
}

#[test]
fn test_ask_is_case_insensitive() {
    let (mut cmd, _dir) = edubot_cmd();
    cmd.args(["ask", "EXPLAIN PHOTOSYNTHESIS"])
        .assert()
        .success()
        .stdout(predicate::str::contains(TOPIC_TABLE[0].template.key_takeaway));
}

#[test]
fn test_ask_unknown_topic_echoes_question() {
    let (mut cmd, _dir) = edubot_cmd();
    cmd.args(["ask", "How do volcanoes erupt?"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Great question about \"How do volcanoes erupt?\"!",
        ));
}

#[test]
fn test_ask_middle_level_simplifies_wording() {
    let (mut cmd, _dir) = edubot_cmd();
    cmd.args(["--level", "middle", "ask", "Why", "utilize", "complex", "numbers?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Middle Level]"))
        .stdout(predicate::str::contains("Why use interesting numbers?"))
        .stdout(predicate::str::contains("complex").not());
}

#[test]
fn test_ask_university_level_from_config() {
    let (mut cmd, _dir) = edubot_cmd_with_config(
        "[chat]\ndefault_level = \"university\"\nresponse_delay_ms = 0\n\n[display]\nshow_timestamps = false\n",
    );
    cmd.args(["ask", "mitosis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[University Level]"))
        .stdout(predicate::str::contains(format!(
            "{}{}",
            TOPIC_TABLE[2].template.explanation, UNIVERSITY_SUFFIX
        )));
}

#[test]
fn test_ask_blank_question_prints_nothing() {
    let (mut cmd, _dir) = edubot_cmd();
    cmd.args(["ask", "   "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_ask_level_flag_accepts_any_case() {
    let (mut cmd, _dir) = edubot_cmd();
    cmd.args(["--level", "Middle", "ask", "What is gravity?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Middle Level]"));
}

#[test]
fn test_ask_unknown_level_flag_reports_invalid_level() {
    let (mut cmd, _dir) = edubot_cmd();
    cmd.args(["--level", "phd", "ask", "What is gravity?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown student level 'phd'"));
}

#[test]
fn test_ask_config_level_accepts_any_case() {
    let (mut cmd, _dir) = edubot_cmd_with_config(
        "[chat]\nresponse_delay_ms = 0\ndefault_level = \"University\"\n\n[display]\nshow_timestamps = false\n",
    );
    cmd.args(["ask", "What is gravity?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[University Level]"));
}

#[test]
fn test_ask_transcript_includes_welcome_and_question() {
    let (mut cmd, _dir) = edubot_cmd();
    cmd.args(["ask", "--transcript", "What is gravity?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome! I'm your educational assistant"))
        .stdout(predicate::str::contains("You: What is gravity?"));
}

#[test]
fn test_ask_custom_assistant_name() {
    let (mut cmd, _dir) = edubot_cmd_with_config(
        "[chat]\nresponse_delay_ms = 0\n\n[display]\nassistant_name = \"Study Buddy\"\n",
    );
    cmd.args(["ask", "gravity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Study Buddy [High Level]"));
}
