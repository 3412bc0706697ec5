//! Alternating marks invariant: X moves first, then players alternate.

use super::Invariant;
use crate::engine::GameState;
use crate::types::Player;

/// Invariant: X has as many marks as O, or exactly one more.
///
/// Together with [`MarkCountMatchesMoves`](super::MarkCountMatchesMoves)
/// this pins the mover of every move to move-count parity.
pub struct AlternatingMarks;

impl Invariant<GameState> for AlternatingMarks {
    fn holds(state: &GameState) -> bool {
        let x = state.board.count_of(Player::X);
        let o = state.board.count_of(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
