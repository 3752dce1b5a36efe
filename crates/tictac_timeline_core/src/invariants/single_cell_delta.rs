//! Single-cell delta invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// That square was empty before, is occupied after, and is the position the
/// later snapshot records as played.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            match prev.board().diff(next.board()).as_slice() {
                [pos] => {
                    prev.board().get(*pos) == Square::Empty
                        && next.board().get(*pos) != Square::Empty
                        && *next.played() == Some(*pos)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty square"
    }
}
