//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player};
use tracing::instrument;

/// The eight winning lines as `(row, col)` triples.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks whether `player` owns all three cells of any row, column or diagonal.
///
/// Lines owned by the other player never count.
#[instrument(skip(board))]
pub fn check_win(board: &Board, player: Player) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|&(row, col)| board.get(row, col).is_owned_by(player))
    })
}

/// Returns the player holding a complete line, if any.
///
/// X is checked first. On boards reachable through play at most one
/// player can hold a line.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|player| check_win(board, *player))
}
