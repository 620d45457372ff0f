//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board
//! storage so the classifier can be tested without a running game.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, has_line};

use super::phases::Outcome;
use super::types::{Board, Player};
use tracing::instrument;

/// Classifies the move `player` just made on `board`.
///
/// A completed line wins even when it also fills the board.
#[instrument(skip(board), fields(occupied = board.occupied()))]
pub fn classify(board: &Board, player: Player) -> Outcome {
    if has_line(board, player) {
        Outcome::Win(player)
    } else if is_full(board) {
        Outcome::BoardFull(player)
    } else {
        Outcome::Continue(player)
    }
}
