//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. They hold no state and never
//! mutate the board, so every variant shares them.

pub mod draw;
pub mod win;

pub use draw::{check_tie, is_full};
pub use win::{check_win, winner};
