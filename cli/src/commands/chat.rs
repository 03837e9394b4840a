//! # EduBot Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements `edubot chat`, the interactive conversation. Every
//! line the student enters is submitted as a question, except for lines that
//! start with `/`, which are session commands:
//!
//! - `/level`: Show the current level and the choices
//! - `/level <middle|high|university>`: Change the level for future questions
//! - `/topics`: List the topics with sample questions
//! - `/history`: Print the whole conversation so far
//! - `/help`: Show this list
//! - `/quit`, `/exit` (or just `bye`): Leave the chat
//!
//! ## Architecture
//!
//! The loop waits on two sources with `tokio::select!`: the next stdin line
//! and the next reply from a timer task. Questions can be typed while earlier
//! answers are still pending. When input ends or the student quits, the loop
//! waits for outstanding answers before exiting so none are lost.
//!
//! ```bash
//! edubot chat
//! edubot --level middle --delay-ms 300 chat
//! ```
//!
use crate::assistant::Level;
use crate::commands::topics::topics_listing;
use crate::conversation::{ChatSession, ConversationStore, Replies};
use crate::core::config::Config;
use crate::core::error::{EdubotError, Result};
use crate::core::templating::MessageRenderer;
use anyhow::anyhow;
use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::{debug, info, warn};

/// Arguments for `edubot chat`.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Start without the assistant's greeting message.
    #[arg(long)]
    pub no_welcome: bool,
}

/// One line of chat input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    /// Anything that isn't a command. Blank lines end up here too and are
    /// ignored by the session.
    Question(String),
    ShowLevel,
    SetLevel(Level),
    Topics,
    History,
    Help,
    Quit,
    Unknown(String),
}

/// Classifies a line of input.
///
/// Only `/level` with an unrecognized level name, or with more than one
/// word after it, is an error.
pub fn parse_input(line: &str) -> std::result::Result<ChatInput, EdubotError> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("bye") {
        return Ok(ChatInput::Quit);
    }
    let Some(command_line) = trimmed.strip_prefix('/') else {
        return Ok(ChatInput::Question(line.to_string()));
    };

    let mut parts = command_line.split_whitespace();
    let command = parts.next().unwrap_or("").to_lowercase();
    let arguments: Vec<&str> = parts.collect();
    let input = match (command.as_str(), arguments.as_slice()) {
        ("level", []) => ChatInput::ShowLevel,
        ("level", [value]) => ChatInput::SetLevel(value.parse()?),
        ("level", values) => {
            return Err(EdubotError::InvalidLevel {
                value: values.join(" "),
            })
        }
        ("topics", _) => ChatInput::Topics,
        ("history", _) => ChatInput::History,
        ("help", _) => ChatInput::Help,
        ("quit" | "exit", _) => ChatInput::Quit,
        _ => ChatInput::Unknown(trimmed.to_string()),
    };
    Ok(input)
}

const HELP_TEXT: &str = "Type a question and press Enter. Commands:
  /level                 show the current level
  /level <level>         switch to middle, high or university
  /topics                list topics with sample questions
  /history               show the conversation so far
  /help                  show this help
  /quit                  leave the chat";

/// # Handle Chat Command (`handle_chat`)
///
/// Runs the interactive loop until the student quits or stdin closes.
pub async fn handle_chat(args: ChatArgs, config: Config) -> Result<()> {
    info!("Handling chat command...");
    let renderer = MessageRenderer::new(&config.display)?;
    let store = if config.chat.show_welcome && !args.no_welcome {
        ConversationStore::with_welcome()
    } else {
        ConversationStore::new()
    };
    let (mut session, mut replies) = ChatSession::new(
        store,
        config.chat.default_level,
        config.chat.response_delay(),
    );

    println!(
        "{} ({}). Type /help for commands, /quit to leave.\n",
        config.display.assistant_name,
        session.level().label()
    );
    if !session.store().is_empty() {
        println!("{}\n", renderer.render_all(session.store().messages())?);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    run_loop(&mut lines, &mut session, &mut replies, &renderer).await?;
    println!("Goodbye!");
    Ok(())
}

/// Reads input until the student leaves, input ends, or a read fails.
///
/// Pending answers are printed before returning in every case, including
/// when the read error is returned.
async fn run_loop<R>(
    lines: &mut Lines<R>,
    session: &mut ChatSession,
    replies: &mut Replies,
    renderer: &MessageRenderer,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut read_error = None;
    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if !handle_line(&line, session, renderer)? {
                        break;
                    }
                }
                Ok(None) => {
                    debug!("End of input reached");
                    break;
                }
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    read_error = Some(e);
                    break;
                }
            },
            Some(reply) = replies.recv() => {
                let message = session.accept(reply);
                println!("{}\n", renderer.render(message)?);
            }
        }
    }

    finish(session, replies, renderer).await?;
    match read_error {
        Some(e) => {
            Err(anyhow!(EdubotError::Io(e.to_string())).context("Failed to read chat input"))
        }
        None => Ok(()),
    }
}

/// Applies one line of input. Returns `false` when the student wants to leave.
fn handle_line(line: &str, session: &mut ChatSession, renderer: &MessageRenderer) -> Result<bool> {
    let input = match parse_input(line) {
        Ok(input) => input,
        Err(e) => {
            println!("{}\n", e);
            return Ok(true);
        }
    };

    match input {
        ChatInput::Question(text) => {
            session.submit(&text);
        }
        ChatInput::ShowLevel => {
            let choices: Vec<String> = Level::ALL
                .iter()
                .map(|level| format!("{} ({})", level.as_str(), level.description()))
                .collect();
            println!(
                "Current level: {}. Available: {}\n",
                session.level().label(),
                choices.join(", ")
            );
        }
        ChatInput::SetLevel(level) => {
            session.set_level(level);
            println!("Switched to {}.\n", level.label());
        }
        ChatInput::Topics => println!("{}\n", topics_listing()),
        ChatInput::History => println!("{}\n", renderer.render_all(session.store().messages())?),
        ChatInput::Help => println!("{}\n", HELP_TEXT),
        ChatInput::Quit => return Ok(false),
        ChatInput::Unknown(command) => {
            println!("Unknown command '{}'. Type /help for the list.\n", command);
        }
    }
    Ok(true)
}

/// Prints answers that were still pending when the loop ended.
async fn finish(
    session: &mut ChatSession,
    replies: &mut Replies,
    renderer: &MessageRenderer,
) -> Result<()> {
    let already_shown = session.store().len();
    let answered = session.drain(replies).await;
    if !answered.is_empty() {
        debug!("Printing {} answers that arrived after input ended", answered.len());
        let late = &session.store().messages()[already_shown..];
        println!("{}\n", renderer.render_all(late)?);
    }
    Ok(())
}
