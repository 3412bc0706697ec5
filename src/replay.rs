//! Headless replay: apply a move list to a fresh game and report.

use anyhow::{Context, Result};
use derive_more::{Display, Error};
use std::fmt::Write;
use tictactoe_engine::{GameEngine, Position, Snapshot};
use tracing::{debug, info, instrument};

/// A move token that is neither a number nor a position label.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognised move '{}' (use 0-8 or a label such as 'top-left')", token)]
pub struct MoveParseError {
    /// The offending token.
    pub token: String,
}

/// Turns a move token into a cell index.
///
/// Digit strings are passed through unchecked, saturating at
/// `usize::MAX`, so that out-of-range indices reach the engine and are
/// reported there.
pub fn parse_move(token: &str) -> Result<usize, MoveParseError> {
    let token = token.trim();
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        // Too large for usize is still out of range.
        return Ok(token.parse::<usize>().unwrap_or(usize::MAX));
    }
    Position::from_label_or_number(token)
        .map(Position::to_index)
        .ok_or_else(|| MoveParseError {
            token: token.to_string(),
        })
}

/// Plays `moves` on a new engine and renders the outcome of each one
/// followed by the final board, or the final snapshot as JSON.
///
/// # Errors
///
/// Fails on an unparseable token or an index the engine refuses as
/// out of range.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn run_replay(moves: &[String], json: bool) -> Result<String> {
    let indices = moves
        .iter()
        .map(|token| parse_move(token))
        .collect::<Result<Vec<_>, _>>()?;

    let (engine, reports) = GameEngine::replay(&indices).context("Replay stopped")?;
    let mut out = String::new();
    for (n, report) in reports.iter().enumerate() {
        debug!(n, outcome = %report.outcome, "Replayed move");
        writeln!(out, "{:>2}. {} [{}]", n + 1, report.outcome, report.tag())?;
    }

    let snapshot = engine.snapshot();
    info!(status = %snapshot.status(), "Replay finished");

    if json {
        return Ok(serde_json::to_string_pretty(&snapshot)?);
    }
    out.push_str(&render_summary(&snapshot));
    Ok(out)
}

/// Board, status and winning line as plain text.
pub fn render_summary(snapshot: &Snapshot) -> String {
    let mut out = format!("\n{}\n\nStatus: {}", snapshot.board().display(), snapshot.status());
    if let Some(line) = snapshot.winning_line() {
        out.push_str(&format!("\nWinning line: {}", line));
    } else if !snapshot.is_terminal() {
        out.push_str(&format!("\nNext: {}", snapshot.current_player()));
    }
    out
}
