//! # EduBot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the EduBot CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting
//! edubot chat
//!
//! # Ask one question at the middle-school level, with debug logging
//! edubot -vv --level middle ask What is photosynthesis?
//! ```
//!
use clap::Parser;
use edubot::commands;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "edubot",
    about = "EduBot: your personal learning companion",
    long_about = "Ask questions about your studies and get explanations, examples, key takeaways\n\
                  and next steps, adapted to your level (middle school, high school, university).",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[command(flatten)]
    global: commands::GlobalArgs,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Start an interactive chat session.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Ask a single question and print the answer.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// List the topics EduBot has prepared answers for.
    #[command(alias = "t")]
    Topics(commands::topics::TopicsArgs),
}

/// Loads configuration where needed and dispatches to the command handler.
async fn run(command: Commands, global: &commands::GlobalArgs) -> anyhow::Result<()> {
    match command {
        Commands::Chat(args) => {
            let config = commands::effective_config(global)?;
            commands::chat::handle_chat(args, config).await
        }
        Commands::Ask(args) => {
            let config = commands::effective_config(global)?;
            commands::ask::handle_ask(args, config).await
        }
        Commands::Topics(args) => commands::topics::handle_topics(args).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = run(cli.command, &cli.global).await;

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Argument Parsing Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use edubot::assistant::Level;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["edubot", "ask", "gravity", "--level", "middle", "--delay-ms", "0"])
            .unwrap();
        assert_eq!(cli.global.level, Some(Level::Middle));
        assert_eq!(cli.global.delay_ms, Some(0));
        assert!(matches!(cli.command, Commands::Ask(_)));
    }

    #[test]
    fn test_aliases_and_verbosity() {
        let cli = Cli::try_parse_from(["edubot", "-vv", "c"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Chat(_)));

        let cli = Cli::try_parse_from(["edubot", "t"]).unwrap();
        assert!(matches!(cli.command, Commands::Topics(_)));
    }

    #[test]
    fn test_invalid_level_flag_rejected() {
        let err = Cli::try_parse_from(["edubot", "--level", "phd", "topics"]).unwrap_err();
        assert!(err.to_string().contains("Unknown student level 'phd'"));
    }

    #[test]
    fn test_level_flag_is_case_insensitive() {
        let cli = Cli::try_parse_from(["edubot", "--level", "High", "topics"]).unwrap();
        assert_eq!(cli.global.level, Some(Level::High));

        let cli = Cli::try_parse_from(["edubot", "-l", "UNIVERSITY", "topics"]).unwrap();
        assert_eq!(cli.global.level, Some(Level::University));
    }
}
