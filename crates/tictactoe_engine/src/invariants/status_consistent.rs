//! Status consistency invariant: the recorded status matches the board.

use super::Invariant;
use crate::engine::GameState;
use crate::rules::{completed_line, is_full};
use crate::types::GameStatus;

/// Invariant: the status is what the rules say about the board.
///
/// - `Won(p)`: the recorded winning line is complete and held by `p`
/// - `Draw`: the board is full and no line is complete
/// - `InProgress`: no line is complete and the board has room
pub struct StatusConsistent;

impl Invariant<GameState> for StatusConsistent {
    fn holds(state: &GameState) -> bool {
        let board = &state.board;
        match state.status {
            GameStatus::Won(player) => state
                .winning_line
                .is_some_and(|line| line.completed_by(board) == Some(player)),
            GameStatus::Draw => {
                state.winning_line.is_none() && is_full(board) && completed_line(board).is_none()
            }
            GameStatus::InProgress => {
                state.winning_line.is_none() && !is_full(board) && completed_line(board).is_none()
            }
        }
    }

    fn description() -> &'static str {
        "Status agrees with the board (win line, full board)"
    }
}
