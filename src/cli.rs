//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe - hot-seat game for two players in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play,

    /// Apply a list of moves to a fresh game and print the result
    Replay {
        /// Comma-separated cells: indices 0-8 or labels such as `center`, `top-left`
        #[arg(value_delimiter = ',', required = true)]
        moves: Vec<String>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}
