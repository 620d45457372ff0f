//! Game phases and the transition table between them.
//!
//! The whole game is a five-state machine. Each accepted move is
//! classified into an [`Outcome`], and [`next_phase`] looks up where that
//! outcome leads from the current [`Phase`].

use super::Player;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Overall game status.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    strum::EnumIter,
)]
pub enum Phase {
    /// X is to move.
    #[default]
    #[display("X to move")]
    XToMove,
    /// O is to move.
    #[display("O to move")]
    OToMove,
    /// X completed a line.
    #[display("X won")]
    XWon,
    /// O completed a line.
    #[display("O won")]
    OWon,
    /// Board filled with no line.
    #[display("Draw")]
    Draw,
}

impl Phase {
    /// True for phases with no outgoing transition.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::XWon | Phase::OWon | Phase::Draw)
    }

    /// The player whose turn it is, or `None` once the game is over.
    pub fn to_move(self) -> Option<Player> {
        match self {
            Phase::XToMove => Some(Player::X),
            Phase::OToMove => Some(Player::O),
            Phase::XWon | Phase::OWon | Phase::Draw => None,
        }
    }

    /// The winner, if the game ended with a completed line.
    pub fn winner(self) -> Option<Player> {
        match self {
            Phase::XWon => Some(Player::X),
            Phase::OWon => Some(Player::O),
            Phase::XToMove | Phase::OToMove | Phase::Draw => None,
        }
    }
}

/// Classification of the move a player just made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// Play continues.
    #[display("{} continues", _0)]
    Continue(Player),
    /// The player completed a line.
    #[display("{} wins", _0)]
    Win(Player),
    /// The player filled the last square without completing a line.
    #[display("{} fills the board", _0)]
    BoardFull(Player),
}

impl Outcome {
    /// The player who made the classified move.
    pub fn player(self) -> Player {
        match self {
            Outcome::Continue(p) | Outcome::Win(p) | Outcome::BoardFull(p) => p,
        }
    }
}

/// A (phase, outcome) pair with no entry in the transition table.
///
/// The console only classifies moves for the player whose turn it is, so
/// hitting this means the caller is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No transition from {phase} on {outcome}")]
pub struct TransitionError {
    /// Phase the game was in.
    pub phase: Phase,
    /// Outcome that was applied.
    pub outcome: Outcome,
}

/// Looks up the phase that follows `outcome` in `phase`.
///
/// # Errors
///
/// Returns [`TransitionError`] for any pair outside the six-entry table,
/// including every transition out of a terminal phase.
#[instrument]
pub fn next_phase(phase: Phase, outcome: Outcome) -> Result<Phase, TransitionError> {
    match (phase, outcome) {
        (Phase::XToMove, Outcome::Continue(Player::X)) => Ok(Phase::OToMove),
        (Phase::OToMove, Outcome::Continue(Player::O)) => Ok(Phase::XToMove),
        (Phase::XToMove, Outcome::BoardFull(Player::X)) => Ok(Phase::Draw),
        (Phase::OToMove, Outcome::BoardFull(Player::O)) => Ok(Phase::Draw),
        (Phase::XToMove, Outcome::Win(Player::X)) => Ok(Phase::XWon),
        (Phase::OToMove, Outcome::Win(Player::O)) => Ok(Phase::OWon),
        _ => Err(TransitionError { phase, outcome }),
    }
}
