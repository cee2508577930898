//! Moves and the errors raised while soliciting, validating or applying them.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cell::Cell;
use crate::types::Player;

/// A move: a player placing their symbol on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell where the player places their symbol.
    pub cell: Cell,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, cell: Cell) -> Self {
        Self { player, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.cell)
    }
}

/// A proposed move that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell number is outside `1..=9`.
    #[display("Cell {} is out of range (must be 1-9)", _0)]
    OutOfRangeCell(i32),

    /// The cell is already taken.
    #[display("Cell {} is already occupied", _0)]
    OccupiedCell(Cell),
}

impl std::error::Error for MoveError {}

/// Failure reported by a [`Strategy`](crate::Strategy) instead of a proposal.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StrategyError {
    /// Asked to move on a board with no empty cell.
    #[display("No empty cells left to choose from")]
    NoEmptyCells,

    /// The move source has nothing more to give.
    #[display("Move input closed: {}", _0)]
    InputClosed(String),
}

impl std::error::Error for StrategyError {}

/// Error returned by [`GameEngine::play_turn`](crate::GameEngine::play_turn).
///
/// The engine state is unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// The game has already been won or tied.
    #[display("Game is already over")]
    MoveAfterGameOver,

    /// A strategy was scheduled with no empty cell on the board.
    #[display("Strategy for {} was asked to move on a full board", _0)]
    StrategyContractViolation(Player),

    /// The strategy of the given player failed to produce a move.
    #[display("Strategy for {} failed: {}", player, source)]
    Strategy {
        /// Player whose strategy failed.
        player: Player,
        /// Underlying failure.
        source: StrategyError,
    },
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayError::Strategy { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Invalid game construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Both seats were given the same symbol.
    #[display("Both players use symbol {}", _0)]
    DuplicateSymbol(Player),
}

impl std::error::Error for SetupError {}
