//! Monotonic board invariant: squares never change once set.

use super::super::Square;
use super::{Invariant, Ply};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Every square occupied before the ply holds the same mark after it, and
/// exactly one previously empty square was filled.
pub struct MonotonicBoardInvariant;

impl Invariant<Ply> for MonotonicBoardInvariant {
    fn holds(ply: &Ply) -> bool {
        let before = ply.before().board().squares();
        let after = ply.after().board().squares();

        let kept = before
            .iter()
            .zip(after)
            .all(|(b, a)| *b == Square::Empty || b == a);
        let filled = before
            .iter()
            .zip(after)
            .filter(|(b, a)| **b == Square::Empty && **a != Square::Empty)
            .count();

        kept && filled == 1
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
