//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} apply_move {Q}`. The precondition decides whether a move is
//! accepted; the postcondition is checked in debug builds.

use crate::action::Rejection;
use crate::engine::GameState;
use crate::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use crate::position::Position;
use crate::types::Cell;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Why `pre` refused the action.
    type Refusal;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: A) -> Result<(), Self::Refusal>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must not be over.
pub struct GameNotOver;

impl GameNotOver {
    /// Refuses moves once the status is terminal.
    pub fn check(state: &GameState) -> Result<(), Rejection> {
        if state.status.is_terminal() {
            Err(Rejection::GameOver(state.status))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Refuses moves onto marked cells.
    pub fn check(state: &GameState, pos: Position) -> Result<(), Rejection> {
        if state.board.is_empty(pos) {
            Ok(())
        } else {
            Err(Rejection::CellOccupied(pos))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Marked cells never change, and a move marks exactly one new cell.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// Compares the board before and after one accepted move.
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let mut newly_marked = 0;
        for (old, new) in before.board.cells().iter().zip(after.board.cells()) {
            match (old, new) {
                (Cell::Empty, Cell::Empty) => {}
                (Cell::Empty, Cell::Occupied(_)) => newly_marked += 1,
                (Cell::Occupied(_), _) if old != new => return false,
                _ => {}
            }
        }
        newly_marked == 1 && after.move_count == before.move_count + 1
    }

    /// Human-readable description.
    pub fn description() -> &'static str {
        "Board is monotonic (marks are never overwritten, one mark per move)"
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is still in progress
/// - Cell is empty
///
/// Postconditions:
/// - Board is monotonic
/// - All [`EngineInvariants`] hold on the new state
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    type Refusal = Rejection;

    #[instrument(skip(state))]
    fn pre(state: &GameState, pos: Position) -> Result<(), Rejection> {
        GameNotOver::check(state)?;
        CellIsEmpty::check(state, pos)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match EngineInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };
        if !MonotonicBoard::holds(before, after) {
            violations.push(InvariantViolation::new(MonotonicBoard::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
