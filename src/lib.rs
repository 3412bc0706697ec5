//! Tic Tac Toe front end
//!
//! A thin presentation layer over [`tictactoe_engine`]. It forwards user
//! selections to the engine and renders the snapshots it gets back.
//!
//! # Architecture
//!
//! - **Cli**: `play` (interactive) and `replay` (headless) commands
//! - **Config**: optional TOML settings for title and logging
//! - **Tui**: ratatui hot-seat board with cursor and digit keys
//! - **Replay**: apply a move list and print each outcome

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Replay
pub use replay::{MoveParseError, parse_move, render_summary, run_replay};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, run_tui};

// Crate-level exports - Engine types
pub use tictactoe_engine as engine;
