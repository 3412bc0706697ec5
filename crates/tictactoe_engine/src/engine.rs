//! The game engine: authoritative state and its mutation entry points.

use crate::action::{EngineError, MoveOutcome, MoveReport};
use crate::contracts::{Contract, MoveContract};
use crate::position::Position;
use crate::rules::{WinLine, completed_line, is_full};
use crate::types::{Board, Cell, GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Complete engine state. Owned by one [`GameEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Marks placed since the last reset.
    #[getter(copy)]
    pub(crate) move_count: u8,
    /// Game status.
    #[getter(copy)]
    pub(crate) status: GameStatus,
    /// Line that ended the game, when won.
    #[getter(copy)]
    pub(crate) winning_line: Option<WinLine>,
}

impl GameState {
    /// Player whose turn it is, from move-count parity.
    pub fn current_player(&self) -> Player {
        Player::for_move_count(self.move_count)
    }
}

/// Read-only copy of engine state handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// The board.
    board: Board,
    /// Player whose turn it is (by parity, also after the game ended).
    #[getter(copy)]
    current_player: Player,
    /// Game status.
    #[getter(copy)]
    status: GameStatus,
    /// Marks placed since the last reset.
    #[getter(copy)]
    move_count: u8,
    /// Line that ended the game, when won.
    #[getter(copy)]
    winning_line: Option<WinLine>,
}

impl Snapshot {
    /// Snapshot of a freshly constructed or reset engine.
    pub fn initial() -> Self {
        Self::from(&GameState::default())
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self {
            board: state.board.clone(),
            current_player: state.current_player(),
            status: state.status,
            move_count: state.move_count,
            winning_line: state.winning_line,
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Each value is an independent game. All mutation goes through
/// [`apply_move`](Self::apply_move) and [`reset`](Self::reset).
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }

    /// Borrows the internal state record.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Positions that can still be marked. Empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.state.status.is_terminal() {
            Vec::new()
        } else {
            self.state.board.empty_positions()
        }
    }

    /// Marks cell `index` (0-8) for the player whose turn it is.
    ///
    /// Occupied cells and finished games give a
    /// [`Rejected`](MoveOutcome::Rejected) report with the state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIndex`] if `index > 8`.
    #[instrument(skip(self), fields(move_count = self.state.move_count))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveReport, EngineError> {
        let Some(position) = Position::from_index(index) else {
            warn!(index, "Move index out of range");
            return Err(EngineError::InvalidIndex { index });
        };

        if let Err(rejection) = MoveContract::pre(&self.state, position) {
            warn!(%position, %rejection, "Move rejected");
            return Ok(MoveReport {
                outcome: MoveOutcome::Rejected(rejection),
                snapshot: self.snapshot(),
            });
        }

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        // Mover is fixed before the counter moves on.
        let player = self.state.current_player();
        self.state.board.set(position, Cell::Occupied(player));
        self.state.move_count += 1;
        self.evaluate_termination(player);

        debug!(%player, %position, status = %self.state.status, "Move accepted");

        #[cfg(debug_assertions)]
        if let Err(violations) = MoveContract::post(&before, &self.state) {
            tracing::error!(?violations, "Postcondition failed after move");
            debug_assert!(violations.is_empty(), "Postcondition failed: {:?}", violations);
        }

        Ok(MoveReport {
            outcome: MoveOutcome::Accepted { player, position },
            snapshot: self.snapshot(),
        })
    }

    /// Decides the status after `mover` placed a mark.
    fn evaluate_termination(&mut self, mover: Player) {
        if let Some((line, _)) = completed_line(&self.state.board) {
            self.state.status = GameStatus::Won(mover);
            self.state.winning_line = Some(line);
            info!(winner = %mover, %line, "Game won");
        } else if is_full(&self.state.board) {
            self.state.status = GameStatus::Draw;
            info!("Game drawn");
        }
    }

    /// Starts a new game and returns its snapshot.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Snapshot {
        info!(previous_status = %self.state.status, "Resetting game");
        self.state = GameState::default();
        self.snapshot()
    }

    /// Plays `indices` in order on a fresh engine.
    ///
    /// Rejected moves are kept in the returned reports.
    ///
    /// # Errors
    ///
    /// Stops at the first index outside 0-8.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<(Self, Vec<MoveReport>), EngineError> {
        let mut engine = Self::new();
        let reports = indices
            .iter()
            .map(|&index| engine.apply_move(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((engine, reports))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{OutcomeTag, Rejection};

    #[test]
    fn test_new_engine_is_initial() {
        let engine = GameEngine::new();
        let snap = engine.snapshot();
        assert_eq!(snap, Snapshot::initial());
        assert_eq!(snap.current_player(), Player::X);
        assert_eq!(snap.status(), GameStatus::InProgress);
        assert_eq!(snap.move_count(), 0);
        assert_eq!(engine.valid_moves().len(), 9);
    }

    #[test]
    fn test_accepted_move_flips_turn() {
        let mut engine = GameEngine::new();
        let report = engine.apply_move(4).unwrap();
        assert_eq!(
            report.outcome,
            MoveOutcome::Accepted {
                player: Player::X,
                position: Position::Center
            }
        );
        assert_eq!(report.snapshot.board().get(Position::Center), Cell::Occupied(Player::X));
        assert_eq!(report.snapshot.current_player(), Player::O);
        assert_eq!(report.snapshot.move_count(), 1);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut engine = GameEngine::new();
        engine.apply_move(0).unwrap();
        let before = engine.snapshot();
        let report = engine.apply_move(0).unwrap();
        assert_eq!(
            report.outcome,
            MoveOutcome::Rejected(Rejection::CellOccupied(Position::TopLeft))
        );
        assert_eq!(report.tag(), OutcomeTag::Rejected);
        assert_eq!(report.snapshot, before);
    }

    #[test]
    fn test_invalid_index_leaves_state() {
        let mut engine = GameEngine::new();
        engine.apply_move(2).unwrap();
        let before = engine.snapshot();
        assert_eq!(engine.apply_move(9), Err(EngineError::InvalidIndex { index: 9 }));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_win_records_line_and_stops_play() {
        let (mut engine, _) = GameEngine::replay(&[0, 3, 1, 4, 2]).unwrap();
        let snap = engine.snapshot();
        assert_eq!(snap.status(), GameStatus::Won(Player::X));
        assert_eq!(snap.winning_line(), Some(WinLine::ALL[0]));
        assert!(engine.valid_moves().is_empty());

        let report = engine.apply_move(8).unwrap();
        assert_eq!(
            report.outcome,
            MoveOutcome::Rejected(Rejection::GameOver(GameStatus::Won(Player::X)))
        );
        assert_eq!(report.snapshot, snap);
    }

    #[test]
    fn test_reset_restores_initial() {
        let (mut engine, _) = GameEngine::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(engine.reset(), Snapshot::initial());
        assert_eq!(engine.snapshot(), Snapshot::initial());
    }

    #[test]
    fn test_replay_stops_at_invalid_index() {
        assert_eq!(
            GameEngine::replay(&[0, 1, 12, 2]).unwrap_err(),
            EngineError::InvalidIndex { index: 12 }
        );
    }
}
