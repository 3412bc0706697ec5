//! Tic-tac-toe game-state engine.
//!
//! A pure state machine: move validation, turn alternation, win/draw
//! detection and reset. It performs no I/O and owns no global state; each
//! [`GameEngine`] is an independent game. Presentation layers call
//! [`GameEngine::apply_move`] and [`GameEngine::reset`] and render the
//! returned [`Snapshot`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index)?;
//! }
//! assert_eq!(engine.snapshot().status(), GameStatus::Won(Player::X));
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod invariants;
mod position;
mod rules;
mod shared;
mod types;

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Board, Cell, GameStatus, Player};

// Crate-level exports - Rules
pub use rules::{LineKind, NotAWinLine, WinLine, check_winner, completed_line, is_draw, is_full};

// Crate-level exports - Engine
pub use action::{EngineError, MoveOutcome, MoveReport, OutcomeTag, Rejection};
pub use engine::{GameEngine, GameState, Snapshot};
pub use shared::SharedEngine;

// Crate-level exports - Contracts and invariants
pub use contracts::{CellIsEmpty, Contract, GameNotOver, MonotonicBoard, MoveContract};
pub use invariants::{
    AlternatingMarks, EngineInvariants, Invariant, InvariantSet, InvariantViolation,
    MarkCountMatchesMoves, StatusConsistent,
};
