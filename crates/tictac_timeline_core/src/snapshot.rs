//! Immutable board snapshots recorded in the game history.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

use crate::{Board, Mark, Position};

/// A board state together with the move that produced it.
///
/// The first snapshot of every game is the empty board with no played
/// position. Every later snapshot records exactly one placed mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board after the move.
    pub(crate) board: Board,
    /// Position of the move that produced this board.
    pub(crate) played: Option<Position>,
}

impl Snapshot {
    /// The empty starting snapshot.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            played: None,
        }
    }

    /// Builds the snapshot that follows `self` when `mark` is placed at `pos`.
    ///
    /// The caller has already checked that the square is empty.
    pub fn advance(&self, pos: Position, mark: Mark) -> Self {
        Self {
            board: self.board.with_mark(pos, mark),
            played: Some(pos),
        }
    }

    /// 1-based row of the move, or `None` for the starting snapshot.
    pub fn played_row(&self) -> Option<usize> {
        self.played.map(Position::row)
    }

    /// 1-based column of the move, or `None` for the starting snapshot.
    pub fn played_col(&self) -> Option<usize> {
        self.played.map(Position::col)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
