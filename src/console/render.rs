//! Text rendering of the board and game messages.

use crate::games::tictactoe::{Board, Phase, Player};

/// First line printed when a session starts.
pub const BANNER: &str = "Welcome to Tic-Tac-Toe!";

/// How to enter a move.
pub const INSTRUCTIONS: &str = "Enter moves as 'row col' (0-2 for each)";

/// Prompt printed before each read, without a trailing newline.
pub const PROMPT: &str = "Enter your move (row col): ";

/// Renders the board as three rows of `X`, `O` or `.`, then a blank line.
pub fn board(board: &Board) -> String {
    let mut out = String::new();
    for row in board.rows() {
        let cells: Vec<&str> = row
            .iter()
            .map(|square| match square.mark() {
                Some(Player::X) => "X",
                Some(Player::O) => "O",
                None => ".",
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Announces whose turn it is.
pub fn turn(player: Player) -> String {
    format!("{player}'s turn")
}

/// Final message for a terminal phase, `None` while the game is active.
pub fn result(phase: Phase) -> Option<&'static str> {
    match phase {
        Phase::XWon => Some("X wins!"),
        Phase::OWon => Some("O wins!"),
        Phase::Draw => Some("It's a draw!"),
        Phase::XToMove | Phase::OToMove => None,
    }
}
