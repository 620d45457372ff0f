//! The game value: current board plus current phase.
//!
//! A [`Game`] is a small `Copy` value. [`Game::play`] never mutates; it
//! returns the game that follows one accepted move.

use super::invariants::{InvariantSet, Ply, TicTacToeInvariants};
use super::phases::{Phase, TransitionError, next_phase};
use super::rules::{classify, win::winning_line};
use super::types::{Board, BoardError};
use super::{Outcome, Position};
use derive_more::{Display, Error, From};
use serde::Serialize;
use tracing::{debug, error, info, instrument};

/// Errors raised while applying a move to a [`Game`].
///
/// None of these are player mistakes: the console checks bounds and
/// occupancy first, so any of them means the caller is broken.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// The game already reached a terminal phase.
    #[display("Game is already over")]
    #[from(ignore)]
    GameOver,

    /// The board refused the placement.
    Board(BoardError),

    /// The phase table has no entry for the classified move.
    Transition(TransitionError),

    /// An invariant was violated after the move.
    #[display("Invariant violation: {}", _0)]
    #[from(ignore)]
    InvariantViolation(#[error(not(source))] String),
}

/// Board and phase of a game in progress or finished.
///
/// Serialize-only: the ply count and phase must agree with the board, so a
/// game is only ever built by [`Game::new`] and [`Game::play`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) phase: Phase,
    pub(crate) plies: u8,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::XToMove,
            plies: 0,
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of moves accepted so far.
    pub fn plies(&self) -> u8 {
        self.plies
    }

    /// True once the game reached a terminal phase.
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Plays the side to move at `pos` and returns the resulting game.
    ///
    /// The move is placed, classified, and fed through the phase table. In
    /// debug builds the game invariants are checked on the way out.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the phase is terminal
    /// - [`GameError::Board`] if `pos` is occupied
    /// - [`GameError::Transition`] if the phase table rejects the outcome
    /// - [`GameError::InvariantViolation`] if a debug invariant check fails
    #[instrument(skip(self), fields(phase = %self.phase, plies = self.plies))]
    pub fn play(self, pos: Position) -> Result<Self, GameError> {
        let player = self.phase.to_move().ok_or(GameError::GameOver)?;

        let board = self.board.place(pos, player)?;
        let outcome = classify(&board, player);
        let phase = next_phase(self.phase, outcome)?;

        let plies = self
            .plies
            .checked_add(1)
            .ok_or_else(|| GameError::InvariantViolation("Ply count overflow".to_string()))?;
        let next = Self {
            board,
            phase,
            plies,
        };

        if cfg!(debug_assertions) {
            TicTacToeInvariants::check_all(&Ply::new(self, next)).map_err(|violations| {
                let descriptions = violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                error!(%descriptions, "Invariant check failed");
                GameError::InvariantViolation(descriptions)
            })?;
        }

        match outcome {
            Outcome::Win(winner) => {
                info!(%winner, line = ?winning_line(&board, winner), "Game won");
            }
            Outcome::BoardFull(_) => info!("Board full, game drawn"),
            Outcome::Continue(_) => {}
        }
        debug!(%player, %pos, %outcome, next_phase = %phase, "Move applied");

        Ok(next)
    }

    /// Replays a sequence of positions from a new game.
    ///
    /// Stops with an error on the first move that cannot be applied,
    /// including any move after the game ended.
    #[instrument(skip(positions), fields(count = positions.len()))]
    pub fn replay(positions: &[Position]) -> Result<Self, GameError> {
        positions.iter().try_fold(Self::new(), |game, pos| game.play(*pos))
    }
}
