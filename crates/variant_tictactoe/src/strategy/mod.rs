//! Player strategies.
//!
//! A strategy turns a view of the board into a proposed cell number.
//! Proposals are raw integers: validation belongs to the engine, which
//! applies the variant's invalid-move policy.

mod interactive;
mod random;
mod scripted;

pub use interactive::{InteractiveStrategy, MoveSource, Proposal};
pub use random::RandomStrategy;
pub use scripted::ScriptedStrategy;

use serde::{Deserialize, Serialize};

use crate::action::StrategyError;
use crate::types::{Board, Player};

/// What a strategy is shown when asked for a move.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    player: Player,
    hide_moves: bool,
}

impl<'a> BoardView<'a> {
    /// Creates a view of `board` for `player`.
    pub fn new(board: &'a Board, player: Player, hide_moves: bool) -> Self {
        Self {
            board,
            player,
            hide_moves,
        }
    }

    /// The true board. Interactive front ends must not draw it when
    /// [`hide_moves`](Self::hide_moves) is set.
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Player to move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// True when the variant withholds visual feedback.
    pub fn hide_moves(&self) -> bool {
        self.hide_moves
    }
}

/// Capability to propose a move.
pub trait Strategy {
    /// Proposes a cell number, nominally `1..=9`.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError`] when no proposal can be produced.
    fn propose_move(&mut self, view: &BoardView<'_>) -> Result<i32, StrategyError>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn propose_move(&mut self, view: &BoardView<'_>) -> Result<i32, StrategyError> {
        (**self).propose_move(view)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Kind of opponent chosen at setup.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OpponentKind {
    /// Another person at the same console.
    #[default]
    Human,
    /// Uniform random choice among empty cells.
    Random,
}
