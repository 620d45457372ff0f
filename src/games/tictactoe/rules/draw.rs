//! Board-full detection for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winning line means the last move drew the game.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    !board.has_empty_cell()
}
