//! Cell numbering for moves.
//!
//! Players address the board with the numbers 1 through 9, row-major:
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//! ```

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::action::MoveError;
use crate::types::Board;

/// A validated cell number in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct Cell(u8);

impl Cell {
    /// All nine cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell(1),
        Cell(2),
        Cell(3),
        Cell(4),
        Cell(5),
        Cell(6),
        Cell(7),
        Cell(8),
        Cell(9),
    ];

    /// Validates a raw cell number.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRangeCell`] when `number` is outside `1..=9`.
    #[instrument]
    pub fn new(number: i32) -> Result<Self, MoveError> {
        if (1..=9).contains(&number) {
            Ok(Cell(number as u8))
        } else {
            Err(MoveError::OutOfRangeCell(number))
        }
    }

    /// Builds a cell from zero-based coordinates.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Cell((row * 3 + col + 1) as u8))
        } else {
            None
        }
    }

    /// The 1-based cell number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        usize::from(self.0 - 1) / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        usize::from(self.0 - 1) % 3
    }

    /// Empty cells of `board` in row-major order.
    #[instrument(skip(board))]
    pub fn empty_cells(board: &Board) -> Vec<Cell> {
        Self::ALL
            .iter()
            .copied()
            .filter(|cell| board.is_empty(*cell))
            .collect()
    }
}

impl TryFrom<i32> for Cell {
    type Error = MoveError;

    fn try_from(number: i32) -> Result<Self, Self::Error> {
        Cell::new(number)
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
