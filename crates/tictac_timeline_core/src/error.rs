//! Error types for the game timeline.
//!
//! Only precondition violations surface as errors. Moves rejected by the game
//! rules (occupied square, board already won) are silent no-ops.

use derive_more::{Display, Error};
use tracing::instrument;

/// Kind of timeline error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TimelineErrorKind {
    /// A cell index outside 0-8 was activated.
    #[display("cell index {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(usize),
    /// A history step beyond the end of the history was requested.
    #[display("step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
    /// A restored state breaks one or more timeline invariants.
    #[display("restored state violates {} timeline invariant(s)", violations)]
    CorruptState {
        /// Number of violated invariants.
        violations: usize,
    },
}

/// Timeline error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Timeline error: {} at {}:{}", kind, file, line)]
pub struct TimelineError {
    /// What went wrong.
    pub kind: TimelineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TimelineError {
    /// Creates a new timeline error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: TimelineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<TimelineErrorKind> for TimelineError {
    #[track_caller]
    fn from(kind: TimelineErrorKind) -> Self {
        Self::new(kind)
    }
}
