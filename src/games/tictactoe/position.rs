//! Board coordinates for tic-tac-toe moves.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A validated (row, col) coordinate on the board.
///
/// Both components are always in `0..SIZE`; the only way to build one is
/// through [`Position::new`] or [`Position::from_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "RawPosition")]
#[display("({row}, {col})")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Coordinates outside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Position ({row}, {col}) is outside the board")]
pub struct PositionError {
    /// Requested row.
    pub row: i64,
    /// Requested column.
    pub col: i64,
}

/// Unchecked wire form of a [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    row: i64,
    col: i64,
}

impl TryFrom<RawPosition> for Position {
    type Error = PositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::from_signed(raw.row, raw.col)
    }
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Creates a position from zero-based row and column.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, PositionError> {
        let widen = |v: usize| i64::try_from(v).unwrap_or(i64::MAX);
        Self::from_signed(widen(row), widen(col))
    }

    /// Creates a position from raw, possibly negative, coordinates.
    ///
    /// Console input is parsed as signed integers so that `-1 0` is an
    /// out-of-range move rather than unparsable text.
    #[instrument]
    pub fn from_signed(row: i64, col: i64) -> Result<Self, PositionError> {
        let range = 0..SIZE as i64;
        if range.contains(&row) && range.contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(PositionError { row, col })
        }
    }

    /// Creates position from board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts position to row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row() * SIZE + self.col()
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        usize::from(self.row)
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        usize::from(self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_map_to_indices() {
        assert_eq!(Position::new(0, 0).unwrap().index(), 0);
        assert_eq!(Position::new(1, 1).unwrap().index(), 4);
        assert_eq!(Position::new(2, 2).unwrap().index(), 8);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            Position::new(3, 0),
            Err(PositionError { row: 3, col: 0 })
        );
        assert!(Position::from_signed(0, -1).is_err());
        assert!(Position::from_signed(5, 5).is_err());
    }

    #[test]
    fn test_huge_coordinates_keep_their_sign() {
        assert_eq!(
            Position::new(usize::MAX, 1),
            Err(PositionError {
                row: i64::MAX,
                col: 1
            })
        );
    }

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 0).unwrap().to_string(), "(2, 0)");
    }
}
