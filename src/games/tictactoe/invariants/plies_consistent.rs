//! Ply count invariant: plies played match occupied squares.

use super::{Invariant, Ply};

/// Invariant: Number of accepted moves equals number of occupied squares.
pub struct PliesConsistentInvariant;

impl Invariant<Ply> for PliesConsistentInvariant {
    fn holds(ply: &Ply) -> bool {
        let game = ply.after();
        game.board().occupied() == usize::from(game.plies())
    }

    fn description() -> &'static str {
        "Ply count matches number of occupied squares"
    }
}
