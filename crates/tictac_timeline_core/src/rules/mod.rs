//! Game rules for tic-tac-toe.
//!
//! Rules are pure functions over a [`Board`](crate::Board) and hold no state,
//! so every move attempt re-evaluates them against the active snapshot.

pub mod win;

pub use win::{LINES, check_winner};
