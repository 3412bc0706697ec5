//! Move outcomes and engine errors.
//!
//! A move request ends one of three ways. Accepted and rejected moves
//! are ordinary results carrying a snapshot; an out-of-range index is a
//! caller bug and comes back as an [`EngineError`].

use crate::engine::Snapshot;
use crate::position::Position;
use crate::types::{GameStatus, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a move on a valid index was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Rejection {
    /// The cell at the position is already marked.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already been won or drawn.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),
}

/// What happened to a move request on a valid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed.
    Accepted {
        /// The player who moved.
        player: Player,
        /// Where the mark went.
        position: Position,
    },
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Plain outcome tag.
    pub fn tag(&self) -> OutcomeTag {
        match self {
            MoveOutcome::Accepted { .. } => OutcomeTag::Accepted,
            MoveOutcome::Rejected(_) => OutcomeTag::Rejected,
        }
    }

    /// Returns true if the mark was placed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Accepted { player, position } => write!(f, "{} -> {}", player, position),
            MoveOutcome::Rejected(reason) => write!(f, "rejected: {}", reason),
        }
    }
}

/// The three ways a move request can end, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum OutcomeTag {
    /// Mark placed.
    Accepted,
    /// Occupied cell or finished game.
    Rejected,
    /// Index outside 0-8.
    InvalidIndex,
}

/// Result of an `apply_move` call on a valid index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Accepted or rejected.
    pub outcome: MoveOutcome,
    /// Engine state after the call (unchanged when rejected).
    pub snapshot: Snapshot,
}

impl MoveReport {
    /// Plain outcome tag.
    pub fn tag(&self) -> OutcomeTag {
        self.outcome.tag()
    }
}

/// Contract violations reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// The requested cell index is outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", index)]
    InvalidIndex {
        /// The offending index.
        index: usize,
    },
}

impl EngineError {
    /// Plain outcome tag.
    pub fn tag(&self) -> OutcomeTag {
        match self {
            EngineError::InvalidIndex { .. } => OutcomeTag::InvalidIndex,
        }
    }
}
