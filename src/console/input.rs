//! Parsing and validation of typed moves.

use crate::games::tictactoe::{Board, Position, PositionError};
use derive_more::{Display, Error};
use tracing::instrument;

/// A line of input that cannot be played.
///
/// The display strings are the messages shown to the player before the
/// prompt is repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Not exactly two integers.
    #[display("Invalid input. Please enter two numbers (0-2) separated by a space.")]
    Unparsable,

    /// Row or column outside 0-2.
    #[display("Invalid position. Use 0-2 for row and column.")]
    OutOfRange(PositionError),

    /// Target square already holds a mark.
    #[display("Position already taken. Try again.")]
    Occupied(#[error(not(source))] Position),
}

/// Parses `row col` into a position.
///
/// Any amount of surrounding or separating whitespace is accepted.
/// Negative numbers parse and are reported as out of range.
#[instrument]
pub fn parse_move(line: &str) -> Result<Position, InputError> {
    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::Unparsable);
    };

    let row: i64 = row.parse().map_err(|_| InputError::Unparsable)?;
    let col: i64 = col.parse().map_err(|_| InputError::Unparsable)?;

    Position::from_signed(row, col).map_err(InputError::OutOfRange)
}

/// Parses `line` and checks that the target square on `board` is free.
#[instrument(skip(board))]
pub fn validate_move(board: &Board, line: &str) -> Result<Position, InputError> {
    let pos = parse_move(line)?;
    if board.is_empty(pos) {
        Ok(pos)
    } else {
        Err(InputError::Occupied(pos))
    }
}
