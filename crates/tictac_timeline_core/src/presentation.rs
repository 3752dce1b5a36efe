//! Presentation of the history list: labels, ordering and the active marker.
//!
//! Nothing here mutates a [`GameState`]. Sorting only changes the order in
//! which entries are yielded.

use std::ops::Range;

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::{GameState, Snapshot};

/// Order in which the history list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest entry first.
    #[default]
    #[display("Ascending")]
    Ascending,
    /// Newest entry first.
    #[display("Descending")]
    Descending,
}

impl SortOrder {
    /// Flips the order. Toggling twice is the identity.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One line of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct HistoryEntry {
    /// History index the entry jumps to.
    step: usize,
    /// Button label.
    label: String,
    /// Whether this is the active snapshot.
    is_current: bool,
}

/// Label for the history entry at `step`.
///
/// The step is the absolute history index, so after a branch the move
/// numbers keep counting from the start of the game.
pub fn entry_label(step: usize, snapshot: &Snapshot) -> String {
    match (snapshot.played_row(), snapshot.played_col()) {
        (Some(row), Some(col)) if step > 0 => {
            format!("Go to move #{step}, played row #{row}, column#{col}")
        }
        _ => "Go to game start".to_string(),
    }
}

/// Lazy iterator over the history list in presentation order.
#[derive(Debug, Clone)]
pub struct HistoryEntries<'a> {
    state: &'a GameState,
    steps: Range<usize>,
    order: SortOrder,
}

impl HistoryEntries<'_> {
    fn entry(&self, step: usize) -> HistoryEntry {
        HistoryEntry::new(
            step,
            entry_label(step, &self.state.history()[step]),
            step == self.state.step(),
        )
    }
}

impl Iterator for HistoryEntries<'_> {
    type Item = HistoryEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let step = match self.order {
            SortOrder::Ascending => self.steps.next(),
            SortOrder::Descending => self.steps.next_back(),
        }?;
        Some(self.entry(step))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl ExactSizeIterator for HistoryEntries<'_> {}

/// Entries for every snapshot in `state`, ordered by `order`.
pub fn history_entries(state: &GameState, order: SortOrder) -> HistoryEntries<'_> {
    HistoryEntries {
        state,
        steps: 0..state.history().len(),
        order,
    }
}
