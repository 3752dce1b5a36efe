//! Bounded model checking of the timeline invariants with Kani.

use super::{InvariantSet, TimelineInvariants};
use crate::{GameState, Position};

impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 9);
        Position::ALL[usize::from(index)]
    }
}

/// Any three moves, accepted or rejected, keep the invariants.
#[kani::proof]
#[kani::unwind(10)]
fn verify_moves_keep_invariants() {
    let mut state = GameState::new();
    for _ in 0..3 {
        state.apply_move(kani::any());
    }
    assert!(TimelineInvariants::check_all(&state).is_ok());
}

/// A jump followed by a move never leaves stale future snapshots behind.
#[kani::proof]
#[kani::unwind(10)]
fn verify_branch_truncates() {
    let mut state = GameState::new();
    state.apply_move(kani::any());
    state.apply_move(kani::any());
    let step: usize = kani::any();
    kani::assume(step < state.history().len());
    let _ = state.jump_to(step);
    let before = state.history().len();
    state.apply_move(kani::any());
    assert!(state.history().len() == before || state.history().len() == step + 2);
}
