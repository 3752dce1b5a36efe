//! Event-driven controller: the single owner of game state and sort order.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::presentation::{HistoryEntries, HistoryEntry, SortOrder, history_entries};
use crate::{Board, GameState, Position, Status, TimelineError, TimelineErrorKind};

/// Input events reported by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// The cell with this board index (0-8) was activated.
    CellActivated(usize),
    /// The history entry for this step was activated.
    HistoryStepActivated(usize),
    /// The sort toggle was activated.
    SortToggled,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Board of the active snapshot.
    board: Board,
    /// Status line.
    status: String,
    /// Whether the status line reports a winner.
    is_win: bool,
    /// Current sort order of `history`.
    sort_order: SortOrder,
    /// History entries in presentation order.
    history: Vec<HistoryEntry>,
}

/// Owns the [`GameState`] and the [`SortOrder`] and applies [`GameEvent`]s.
#[derive(Debug, Clone, Default, Getters)]
pub struct GameController {
    state: GameState,
    sort_order: SortOrder,
}

impl GameController {
    /// Creates a controller for a fresh game.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            state: GameState::new(),
            sort_order,
        }
    }

    /// Applies one event.
    ///
    /// Moves rejected by the rules are not errors; the state simply does not
    /// change.
    ///
    /// # Errors
    ///
    /// Returns a [`TimelineError`] when a cell index or history step is out
    /// of range. The state is unchanged in that case.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: GameEvent) -> Result<(), TimelineError> {
        match event {
            GameEvent::CellActivated(index) => {
                let pos = Position::from_index(index)
                    .ok_or(TimelineErrorKind::CellOutOfRange(index))?;
                self.state.apply_move(pos);
            }
            GameEvent::HistoryStepActivated(step) => self.state.jump_to(step)?,
            GameEvent::SortToggled => {
                self.sort_order = self.sort_order.toggle();
                debug!(order = %self.sort_order, "Sort order toggled");
            }
        }
        Ok(())
    }

    /// History entries in the current sort order.
    pub fn entries(&self) -> HistoryEntries<'_> {
        history_entries(&self.state, self.sort_order)
    }

    /// Builds the render-ready view of the active snapshot.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        let status: Status = self.state.status();
        GameView {
            board: *self.state.current_snapshot().board(),
            status: status.to_string(),
            is_win: status.is_win(),
            sort_order: self.sort_order,
            history: self.entries().collect(),
        }
    }
}
