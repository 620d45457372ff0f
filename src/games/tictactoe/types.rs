//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game, also the mark they place.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Placement rejected by the board.
///
/// Callers validate occupancy before placing, so this error means the
/// caller is broken rather than the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),
}

/// 3x3 tic-tac-toe board.
///
/// The board is a plain value: [`Board::place`] returns a new board and
/// leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    pub(crate) squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SquareOccupied`] if the square already holds a
    /// mark. The board is never overwritten.
    #[instrument(skip(self), fields(occupied = self.occupied()))]
    pub fn place(self, pos: Position, player: Player) -> Result<Self, BoardError> {
        if !self.is_empty(pos) {
            return Err(BoardError::SquareOccupied(pos));
        }
        let mut squares = self.squares;
        squares[pos.index()] = Square::Occupied(player);
        Ok(Self { squares })
    }

    /// True if at least one square is still empty.
    pub fn has_empty_cell(&self) -> bool {
        self.squares.contains(&Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Iterates over the three rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(3)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a board with every square empty.
pub fn empty_board() -> Board {
    Board::new()
}

/// Returns `board` with `mark` placed at `pos`.
///
/// Row and column bounds are enforced when the [`Position`] is built.
#[instrument(skip(board))]
pub fn place(board: Board, pos: Position, mark: Player) -> Result<Board, BoardError> {
    board.place(pos, mark)
}

/// True if `board` has at least one empty square.
pub fn has_empty_cell(board: &Board) -> bool {
    board.has_empty_cell()
}
