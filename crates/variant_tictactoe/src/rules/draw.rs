//! Tie detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A tie is a full board where nobody holds a line.
#[instrument(skip(board))]
pub fn check_tie(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
