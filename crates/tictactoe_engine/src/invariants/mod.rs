//! First-class invariants for the engine state.
//!
//! Invariants are logical properties that must hold between operations.
//! They are testable independently and checked after every accepted move
//! in debug builds.

mod alternating_marks;
mod mark_count;
mod status_consistent;

pub use alternating_marks::AlternatingMarks;
pub use mark_count::MarkCountMatchesMoves;
pub use status_consistent::StatusConsistent;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

/// All engine state invariants as a composable set.
pub type EngineInvariants = (MarkCountMatchesMoves, AlternatingMarks, StatusConsistent);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameEngine, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let engine = GameEngine::new();
        assert!(EngineInvariants::check_all(engine.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let (engine, _) = GameEngine::replay(&[0, 4, 2]).unwrap();
        assert!(EngineInvariants::check_all(engine.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut state = GameEngine::new().state().clone();
        // Two O marks, no moves counted.
        state.board.set(Position::TopLeft, Cell::Occupied(Player::O));
        state.board.set(Position::Center, Cell::Occupied(Player::O));

        let violations = EngineInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, MarkCountMatchesMoves::description());
        assert_eq!(violations[1].description, AlternatingMarks::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MarkCountMatchesMoves, AlternatingMarks);
        let (engine, _) = GameEngine::replay(&[8, 7]).unwrap();
        assert!(TwoInvariants::check_all(engine.state()).is_ok());
    }
}
