//! Cursor invariant: the active step always names a recorded snapshot.

use super::Invariant;
use crate::GameState;

/// Invariant: history starts with the empty snapshot and the step is in range.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        match state.history().first() {
            Some(first) => {
                first.played().is_none()
                    && first.board().occupied_count() == 0
                    && state.step() < state.history().len()
            }
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts empty and the cursor is within it"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_cursor_past_end_violates() {
        let mut state = GameState::new();
        state.apply_move(Position::Center);
        state.step = 2;
        assert!(!CursorInBoundsInvariant::holds(&state));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut state = GameState::new();
        state.history.clear();
        assert!(!CursorInBoundsInvariant::holds(&state));
    }
}
