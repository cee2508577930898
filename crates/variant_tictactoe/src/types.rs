//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// Player symbol. Each game has exactly one player per symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board: empty or owned by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the owning player, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns true if the square is occupied by `player`.
    pub fn is_owned_by(self, player: Player) -> bool {
        self == Square::Occupied(player)
    }
}

/// 3x3 tic-tac-toe board indexed by `(row, col)`, each in `0..3`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the square at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`. Callers validate
    /// coordinates before touching the board.
    pub fn get(&self, row: usize, col: usize) -> Square {
        self.squares[row][col]
    }

    /// Sets the square at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    pub fn set(&mut self, row: usize, col: usize, square: Square) {
        self.squares[row][col] = square;
    }

    /// Returns the square addressed by a cell number.
    pub fn cell(&self, cell: Cell) -> Square {
        self.get(cell.row(), cell.col())
    }

    /// Sets the square addressed by a cell number.
    pub fn place(&mut self, cell: Cell, square: Square) {
        self.set(cell.row(), cell.col(), square);
    }

    /// Checks if the addressed square is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.cell(cell) == Square::Empty
    }

    /// True iff every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares
            .iter()
            .flatten()
            .all(|square| *square != Square::Empty)
    }

    /// True iff at least one square is empty.
    pub fn has_empty_cell(&self) -> bool {
        self.squares
            .iter()
            .flatten()
            .any(|square| *square == Square::Empty)
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|square| **square != Square::Empty)
            .count()
    }

    /// Squares in row-major order.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.squares
    }

    /// Formats the board as three lines of `X`, `O` and `-`.
    pub fn render(&self) -> String {
        self.squares
            .iter()
            .map(|row| {
                row.iter()
                    .map(|square| match square {
                        Square::Empty => "-".to_string(),
                        Square::Occupied(player) => player.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert!(board.has_empty_cell());
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(1, 2, Square::Occupied(Player::O));
        assert_eq!(board.get(1, 2), Square::Occupied(Player::O));
        assert_eq!(board.get(2, 1), Square::Empty);
        assert_eq!(board.rows()[1][2], Square::Occupied(Player::O));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_coordinates_panic() {
        let board = Board::new();
        board.get(3, 0);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for row in 0..3 {
            for col in 0..3 {
                board.set(row, col, Square::Occupied(Player::X));
            }
        }
        assert!(board.is_full());
        assert!(!board.has_empty_cell());
    }

    #[test]
    fn test_render() {
        let mut board = Board::new();
        board.set(0, 0, Square::Occupied(Player::X));
        board.set(2, 2, Square::Occupied(Player::O));
        assert_eq!(board.render(), "X - -\n- - -\n- - O");
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("x".parse::<Player>().ok(), Some(Player::X));
        assert_eq!("O".parse::<Player>().ok(), Some(Player::O));
        assert!("z".parse::<Player>().is_err());
    }
}
