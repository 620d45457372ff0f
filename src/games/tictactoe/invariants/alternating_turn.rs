//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Phase, Player};
use super::{Invariant, Ply};

/// Invariant: Players alternate turns.
///
/// X moves first, so X has placed either as many marks as O or exactly one
/// more. While the game is active the side to move must match those counts.
pub struct AlternatingTurnInvariant;

impl Invariant<Ply> for AlternatingTurnInvariant {
    fn holds(ply: &Ply) -> bool {
        let game = ply.after();
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);

        match game.phase() {
            Phase::XToMove => x == o,
            Phase::OToMove => x == o + 1,
            Phase::XWon | Phase::OWon | Phase::Draw => x == o || x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
