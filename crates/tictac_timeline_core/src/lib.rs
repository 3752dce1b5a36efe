//! Tic-tac-toe with a navigable move history.
//!
//! The crate is the pure game core: no I/O, no rendering.
//!
//! # Architecture
//!
//! - **[`GameState`]**: snapshot history plus the active step; applies moves
//!   and jumps between steps
//! - **[`rules::check_winner`]**: stateless win detection over a [`Board`]
//! - **[`presentation`]**: history labels and sort order
//! - **[`GameController`]**: owns state and sort order, consumes
//!   [`GameEvent`]s from a renderer and produces a [`GameView`]
//!
//! # Example
//!
//! ```
//! use tictac_timeline_core::{GameController, GameEvent, SortOrder};
//!
//! let mut game = GameController::new(SortOrder::Ascending);
//! for cell in [0, 4, 3, 5, 6] {
//!     game.dispatch(GameEvent::CellActivated(cell))?;
//! }
//! assert_eq!(game.view().status(), "Winner: X");
//! # Ok::<(), tictac_timeline_core::TimelineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
pub mod invariants;
mod position;
pub mod presentation;
pub mod rules;
mod snapshot;
mod state;
mod types;

pub use controller::{GameController, GameEvent, GameView};
pub use error::{TimelineError, TimelineErrorKind};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TimelineInvariants};
pub use position::Position;
pub use presentation::{HistoryEntry, SortOrder};
pub use snapshot::Snapshot;
pub use state::{GameState, Status};
pub use types::{Board, Mark, Square};
