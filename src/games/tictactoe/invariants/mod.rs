//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every ply.
//! They are testable independently and serve as documentation of what the
//! game guarantees.

use derive_getters::Getters;
use derive_new::new;

use super::Game;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// One accepted move: the game before and after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct Ply {
    /// Game state before the move.
    before: Game,
    /// Game state after the move.
    after: Game,
}

pub mod alternating_turn;
pub mod monotonic_board;
pub mod plies_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use plies_consistent::PliesConsistentInvariant;

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    PliesConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Phase, Player, Position, Square};

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_real_plies() {
        let mut game = Game::new();
        for p in [pos(0, 0), pos(1, 1), pos(0, 1)] {
            let next = game.play(p).unwrap();
            assert!(TicTacToeInvariants::check_all(&Ply::new(game, next)).is_ok());
            game = next;
        }
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let before = Game::new();
        let mut after = before;
        after.board.squares[0] = Square::Occupied(Player::O);
        after.board.squares[1] = Square::Occupied(Player::O);
        after.phase = Phase::OToMove;
        after.plies = 1;

        let violations = TicTacToeInvariants::check_all(&Ply::new(before, after)).unwrap_err();
        assert_eq!(violations.len(), 3);
    }
}
