//! Random-move strategy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use super::{BoardView, Strategy};
use crate::action::StrategyError;
use crate::cell::Cell;

/// Picks uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    /// Creates a strategy drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomStrategy<StdRng> {
    /// Deterministic strategy for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Strategy seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    #[instrument(skip(self, view), fields(player = %view.player()))]
    fn propose_move(&mut self, view: &BoardView<'_>) -> Result<i32, StrategyError> {
        let cells = Cell::empty_cells(view.board());
        if cells.is_empty() {
            return Err(StrategyError::NoEmptyCells);
        }

        let cell = cells[self.rng.random_range(0..cells.len())];
        debug!(%cell, choices = cells.len(), "Random strategy chose cell");
        Ok(i32::from(cell.number()))
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Player, Square};

    #[test]
    fn test_never_proposes_occupied_cell() {
        for seed in 0..200 {
            let mut strategy = RandomStrategy::seeded(seed);
            let mut board = Board::new();
            let mut player = Player::X;
            while board.has_empty_cell() {
                let view = BoardView::new(&board, player, false);
                let number = strategy.propose_move(&view).unwrap();
                let cell = Cell::new(number).unwrap();
                assert!(board.is_empty(cell), "seed {seed} proposed taken cell {cell}");
                board.place(cell, Square::Occupied(player));
                player = player.opponent();
            }
        }
    }

    #[test]
    fn test_only_empty_cell_is_chosen() {
        let mut board = Board::new();
        for cell in Cell::ALL.iter().filter(|cell| cell.number() != 4) {
            board.place(*cell, Square::Occupied(Player::X));
        }
        let mut strategy = RandomStrategy::seeded(7);
        let view = BoardView::new(&board, Player::O, false);
        assert_eq!(strategy.propose_move(&view), Ok(4));
        assert_eq!(strategy.name(), "random");
    }

    #[test]
    fn test_full_board_is_contract_violation() {
        let mut board = Board::new();
        for cell in Cell::ALL {
            board.place(cell, Square::Occupied(Player::O));
        }
        let mut strategy = RandomStrategy::seeded(1);
        let view = BoardView::new(&board, Player::X, false);
        assert_eq!(strategy.propose_move(&view), Err(StrategyError::NoEmptyCells));
    }

    #[test]
    fn test_covers_all_empty_cells() {
        let board = Board::new();
        let mut strategy = RandomStrategy::seeded(99);
        let mut seen = [false; 9];
        for _ in 0..500 {
            let view = BoardView::new(&board, Player::X, false);
            let number = strategy.propose_move(&view).unwrap();
            seen[(number - 1) as usize] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
