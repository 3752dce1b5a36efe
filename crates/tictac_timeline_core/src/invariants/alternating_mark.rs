//! Alternating mark invariant: X, O, X, O, ... along the history.

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: the mark placed to reach step `i` is the mark for step `i - 1`.
///
/// X places the first mark, so odd steps hold a new X and even steps a new O.
pub struct AlternatingMarkInvariant;

impl Invariant<GameState> for AlternatingMarkInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snap)| {
                snap.played()
                    .and_then(|pos| snap.board().get(pos).mark())
                    .is_some_and(|mark| mark == Mark::for_step(step - 1))
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
