//! Authoritative game state: the snapshot history and the active step.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::rules::check_winner;
use crate::{Mark, Position, Snapshot, TimelineError, TimelineErrorKind};

/// Status line derived from the active snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A line is complete on the active board.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// No line is complete; this mark moves next. A full board without a
    /// winner also lands here.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

impl Status {
    /// Whether the status reports a winner.
    pub fn is_win(self) -> bool {
        matches!(self, Status::Winner(_))
    }
}

/// History of snapshots plus a cursor into it.
///
/// The cursor (`step`) selects the displayed snapshot. Whose turn it is
/// follows from the cursor's parity, so jumping around the history never
/// needs to patch a separate turn flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) step: usize,
}

impl GameState {
    /// Creates a game holding only the empty starting snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            step: 0,
        }
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the active snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The active snapshot.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history[self.step]
    }

    /// Mark that moves from the active snapshot.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.step)
    }

    /// Winner on the active board, if any.
    pub fn winner(&self) -> Option<Mark> {
        check_winner(self.current_snapshot().board())
    }

    /// Status line for the active board.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(mark) => Status::Winner(mark),
            None => Status::NextPlayer(self.next_mark()),
        }
    }

    /// Places the next mark at `pos`.
    ///
    /// Snapshots after the active step are discarded first, so playing from
    /// an earlier step starts a new branch. The move is silently ignored when
    /// the active board already has a winner or the square is occupied; in
    /// that case nothing changes, including the discarded branch.
    #[instrument(skip(self), fields(step = self.step, len = self.history.len()))]
    pub fn apply_move(&mut self, pos: Position) {
        let current = *self.current_snapshot();

        if let Some(winner) = check_winner(current.board()) {
            debug!(%winner, "Move rejected: board already won");
            return;
        }
        if !current.board().is_empty(pos) {
            debug!("Move rejected: square occupied");
            return;
        }

        let mark = self.next_mark();
        let discarded = self.history.len() - (self.step + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating future snapshots");
        }
        self.history.truncate(self.step + 1);
        self.history.push(current.advance(pos, mark));
        self.step = self.history.len() - 1;

        info!(%mark, %pos, step = self.step, "Move applied");
        debug_assert!(
            TimelineInvariants::check_all(self).is_ok(),
            "timeline invariants violated after move"
        );
    }

    /// Makes `step` the active snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineErrorKind::StepOutOfRange`] if `step` is not a valid
    /// history index; the cursor is left as it was.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), TimelineError> {
        let len = self.history.len();
        if step >= len {
            warn!("Jump rejected: step out of range");
            return Err(TimelineErrorKind::StepOutOfRange { step, len }.into());
        }
        self.step = step;
        info!(next = %self.next_mark(), "Jumped to step");
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Snapshot>,
    step: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = TimelineError;

    #[instrument(skip(raw), fields(len = raw.history.len(), step = raw.step))]
    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            step: raw.step,
        };
        match TimelineInvariants::check_all(&state) {
            Ok(()) => Ok(state),
            Err(violations) => {
                for violation in &violations {
                    warn!(%violation, "Restored state rejected");
                }
                Err(TimelineErrorKind::CorruptState {
                    violations: violations.len(),
                }
                .into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(indices: &[usize]) -> GameState {
        let mut state = GameState::new();
        for &i in indices {
            let pos = Position::from_index(i).expect("valid index");
            state.apply_move(pos);
        }
        state
    }

    #[test]
    fn test_new_game_starts_with_x() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.step(), 0);
        assert_eq!(state.status(), Status::NextPlayer(Mark::X));
        assert_eq!(state.current_snapshot().played(), &None);
    }

    #[test]
    fn test_accepted_move_records_coordinates() {
        let state = play(&[5]);
        let snap = state.current_snapshot();
        assert_eq!(snap.board().get(Position::MiddleRight), Square::Occupied(Mark::X));
        assert_eq!((snap.played_row(), snap.played_col()), (Some(2), Some(3)));
        assert_eq!(state.next_mark(), Mark::O);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut state = play(&[4]);
        let before = state.clone();
        state.apply_move(Position::Center);
        assert_eq!(state, before);
    }

    #[test]
    fn test_rejected_move_after_jump_keeps_future() {
        let mut state = play(&[0, 1, 2]);
        state.jump_to(1).expect("in range");
        state.apply_move(Position::TopLeft);
        assert_eq!(state.history().len(), 4);
        assert_eq!(state.step(), 1);
    }

    #[test]
    fn test_jump_out_of_range_leaves_cursor() {
        let mut state = play(&[0, 1]);
        let err = state.jump_to(3).expect_err("out of range");
        assert_eq!(err.kind, TimelineErrorKind::StepOutOfRange { step: 3, len: 3 });
        assert_eq!(state.step(), 2);
    }

    #[test]
    fn test_deserialize_restores_valid_state() {
        let mut state = play(&[0, 4, 8]);
        state.jump_to(2).expect("in range");
        let json = serde_json::to_string(&state).expect("serializable");
        let restored: GameState = serde_json::from_str(&json).expect("valid state");
        assert_eq!(restored, state);
    }

    #[test]
    fn test_deserialize_rejects_step_past_end() {
        let mut value = serde_json::to_value(GameState::new()).expect("serializable");
        value["step"] = serde_json::json!(7);
        let err = serde_json::from_value::<GameState>(value).expect_err("step past end");
        assert!(err.to_string().contains("1 timeline invariant"));
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let json = r#"{"history":[],"step":0}"#;
        assert!(serde_json::from_str::<GameState>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_repeated_mark() {
        let mut state = play(&[0]);
        let second = state.history[1].advance(Position::Center, Mark::X);
        state.history.push(second);
        let value = serde_json::to_value(&state).expect("serializable");
        assert!(serde_json::from_value::<GameState>(value).is_err());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Winner(Mark::O).to_string(), "Winner: O");
        assert_eq!(Status::NextPlayer(Mark::X).to_string(), "Next player: X");
    }
}
