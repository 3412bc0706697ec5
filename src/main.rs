//! Tic Tac Toe - terminal front end.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tictactoe::{AppConfig, Cli, Command, run_replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Replay { moves, json } => {
            init_stderr_tracing(&config);
            let output = run_replay(&moves, json)?;
            println!("{}", output);
            Ok(())
        }
    }
}

/// Run the interactive UI, logging to a file so the screen stays clean.
fn run_play(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(log_file = %config.log_file().display(), "Logging initialized");
    run_tui(config.title())
}

fn init_stderr_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}
