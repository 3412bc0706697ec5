//! Draw detection logic for tic-tac-toe.

use super::win::completed_line;
use crate::types::Board;

/// Checks if the board is full (all cells marked).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no completed line is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && completed_line(board).is_none()
}
