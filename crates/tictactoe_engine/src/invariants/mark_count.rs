//! Mark count invariant: every counted move left exactly one mark.

use super::Invariant;
use crate::engine::GameState;

/// Invariant: the number of marked cells equals the move count.
pub struct MarkCountMatchesMoves;

impl Invariant<GameState> for MarkCountMatchesMoves {
    fn holds(state: &GameState) -> bool {
        state.board.marked_count() == usize::from(state.move_count)
    }

    fn description() -> &'static str {
        "Marked cells equal the move count"
    }
}
