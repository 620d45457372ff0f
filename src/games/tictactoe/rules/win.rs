//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

const fn at(row: u8, col: u8) -> usize {
    (row * 3 + col) as usize
}

/// The 8 winning lines as board indices: rows, columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Checks whether `player` holds all three squares of any line.
#[instrument(skip(board))]
pub fn has_line(board: &Board, player: Player) -> bool {
    let squares = board.squares();
    LINES
        .iter()
        .any(|line| line.iter().all(|i| squares[*i] == Square::Occupied(player)))
}

/// Returns the positions of the first line completed by `player`, if any.
pub fn winning_line(board: &Board, player: Player) -> Option<[Position; 3]> {
    let squares = board.squares();
    LINES
        .iter()
        .find(|line| line.iter().all(|i| squares[*i] == Square::Occupied(player)))
        .and_then(|[a, b, c]| {
            Some([
                Position::from_index(*a)?,
                Position::from_index(*b)?,
                Position::from_index(*c)?,
            ])
        })
}
