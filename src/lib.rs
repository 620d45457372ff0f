//! Strictly tic-tac-toe console - two players, one terminal
//!
//! The game is an explicit state machine: every accepted move is placed on
//! an immutable board, classified, and fed through a fixed phase table.
//!
//! # Architecture
//!
//! - **Games**: board, rules, phases, and invariants for tic-tac-toe
//! - **Console**: input parsing, text rendering, and the interactive loop
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe_console::{Game, Phase, Position};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let game = Game::new().play(Position::new(1, 1)?)?;
//! assert_eq!(game.phase(), Phase::OToMove);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod games;

// Crate-level exports - Console
pub use console::{InputError, Session, SessionError, Step, parse_move, render, validate_move};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardError, Game, GameError, Outcome, Phase, Player, Position, PositionError,
    SIZE, Square, TransitionError, classify, empty_board, has_empty_cell, next_phase, place,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants;
pub use games::tictactoe::rules;
