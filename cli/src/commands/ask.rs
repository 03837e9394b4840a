//! # EduBot Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! `edubot ask <question>` submits one question through the same session
//! flow as the chat, waits the configured delay for the answer, prints it and
//! exits. A blank question is ignored and nothing is printed.
//!
//! ```bash
//! edubot ask What is gravity?
//! edubot --level university ask "How does mitosis work?" --transcript
//! ```
//!
use crate::conversation::{ChatSession, ConversationStore};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::templating::MessageRenderer;
use clap::Parser;
use tracing::{debug, info};

/// Arguments for `edubot ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question. Several words are joined with spaces, so quoting is optional.
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,

    /// Print the whole conversation (greeting, question and answer) instead of only the answer.
    #[arg(long)]
    pub transcript: bool,
}

/// # Handle Ask Command (`handle_ask`)
///
/// Asks a single question and prints the answer.
pub async fn handle_ask(args: AskArgs, config: Config) -> Result<()> {
    let question = args.question.join(" ");
    info!("Handling ask command for: {:?}", question);

    let renderer = MessageRenderer::new(&config.display)?;
    let store = if args.transcript && config.chat.show_welcome {
        ConversationStore::with_welcome()
    } else {
        ConversationStore::new()
    };
    let (mut session, mut replies) = ChatSession::new(
        store,
        config.chat.default_level,
        config.chat.response_delay(),
    );

    if session.submit(&question).is_none() {
        debug!("Nothing to ask: the question is blank");
        return Ok(());
    }
    session.drain(&mut replies).await;

    let output = if args.transcript {
        renderer.render_all(session.store().messages())?
    } else {
        match session.store().last() {
            Some(answer) => renderer.render(answer)?,
            None => String::new(),
        }
    };
    println!("{}", output);
    Ok(())
}
