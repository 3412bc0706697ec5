//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// One of the three rows.
    Row,
    /// One of the three columns.
    Column,
    /// One of the two diagonals.
    Diagonal,
}

/// One of the 8 index triples that win the game when uniformly marked.
///
/// Deserialization accepts only the triples in [`WinLine::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Position; 3]", into = "[Position; 3]")]
pub struct WinLine([Position; 3]);

/// A position triple that is not a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{:?} is not a winning line", positions)]
pub struct NotAWinLine {
    /// The rejected triple.
    pub positions: [Position; 3],
}

impl TryFrom<[Position; 3]> for WinLine {
    type Error = NotAWinLine;

    fn try_from(positions: [Position; 3]) -> Result<Self, Self::Error> {
        WinLine::ALL
            .iter()
            .copied()
            .find(|line| line.0 == positions)
            .ok_or(NotAWinLine { positions })
    }
}

impl From<WinLine> for [Position; 3] {
    fn from(line: WinLine) -> Self {
        line.0
    }
}

impl WinLine {
    /// All winning lines, in evaluation order: rows, columns, diagonals.
    pub const ALL: [WinLine; 8] = [
        // Rows
        WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        WinLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        WinLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
        // Columns
        WinLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        WinLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
        WinLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
        // Diagonals
        WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
        WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Whether this line is a row, a column or a diagonal.
    pub fn kind(&self) -> LineKind {
        let [a, b, c] = self.0;
        if a.row() == b.row() && b.row() == c.row() {
            LineKind::Row
        } else if a.col() == b.col() && b.col() == c.col() {
            LineKind::Column
        } else {
            LineKind::Diagonal
        }
    }

    /// Returns the player who holds all three cells of this line, if any.
    pub fn completed_by(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.0;
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            cell.player()
        } else {
            None
        }
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "{} [{}, {}, {}]", self.kind(), a, b, c)
    }
}

/// Finds the first completed line, in [`WinLine::ALL`] order.
pub fn completed_line(board: &Board) -> Option<(WinLine, Player)> {
    WinLine::ALL
        .iter()
        .find_map(|line| line.completed_by(board).map(|player| (*line, player)))
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    completed_line(board).map(|(_, player)| player)
}
