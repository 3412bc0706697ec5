//! Thread-safe handle to a single game.

use crate::action::{EngineError, MoveReport};
use crate::engine::{GameEngine, Snapshot};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::instrument;

/// Cloneable handle sharing one [`GameEngine`] between threads.
///
/// One lock guards the whole game; every operation holds it for its full
/// read-compute-write.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    engine: Arc<Mutex<GameEngine>>,
}

impl SharedEngine {
    /// Creates a handle to a new game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    // Engine state is consistent between operations, so a poisoned lock
    // is still safe to use.
    fn lock(&self) -> MutexGuard<'_, GameEngine> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`GameEngine::apply_move`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIndex`] if `index > 8`.
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: usize) -> Result<MoveReport, EngineError> {
        self.lock().apply_move(index)
    }

    /// See [`GameEngine::reset`].
    #[instrument(skip(self))]
    pub fn reset(&self) -> Snapshot {
        self.lock().reset()
    }

    /// See [`GameEngine::snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }
}

impl From<GameEngine> for SharedEngine {
    fn from(engine: GameEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }
}
