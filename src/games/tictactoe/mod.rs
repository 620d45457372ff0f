//! Tic-tac-toe: board, rules, and the phase state machine.

mod game;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod types;

pub use game::{Game, GameError};
pub use phases::{Outcome, Phase, TransitionError, next_phase};
pub use position::{Position, PositionError, SIZE};
pub use rules::classify;
pub use types::{Board, BoardError, Player, Square, empty_board, has_empty_cell, place};
