//! Game variants and their per-move rules.
//!
//! [`Variant`] is the plain choice made at setup. [`VariantRules`] is the
//! same choice carrying whatever state the variant tracks during play;
//! the engine calls its hooks at fixed points of every turn.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::action::Move;
use crate::history::MoveHistory;
use crate::types::{Board, Square};

/// Number of most recent moves kept on the board in limited-memory games.
pub const MEMORY_WINDOW: usize = 6;

/// Number of moves revealed on the blind board.
pub const BLIND_VISIBLE_MOVES: usize = 2;

/// Rule set chosen for a game.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Variant {
    /// Standard rules.
    #[default]
    Classic,
    /// Only the six most recent moves stay on the board.
    LimitedMemory,
    /// Players see only each player's first move; an invalid move loses the turn.
    Blind,
}

impl Variant {
    /// Human-readable name for menus.
    pub fn label(self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::LimitedMemory => "Limited memory",
            Variant::Blind => "Blind",
        }
    }
}

/// What happens when a strategy proposes an invalid move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMovePolicy {
    /// Ask the same player again; no turn is consumed.
    Retry,
    /// The player loses the turn.
    Forfeit,
}

/// Variant rules with their play-time state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariantRules {
    /// No extra behavior.
    Classic,
    /// Sliding window over applied moves.
    LimitedMemory {
        /// The most recent moves still on the board.
        memory: MoveHistory,
    },
    /// Hidden board.
    Blind {
        /// The first applied move of each player, shown on the visible board.
        first_moves: Vec<Move>,
    },
}

impl VariantRules {
    /// Fresh rules for a new game.
    #[instrument]
    pub fn new(variant: Variant) -> Self {
        match variant {
            Variant::Classic => VariantRules::Classic,
            Variant::LimitedMemory => VariantRules::LimitedMemory {
                memory: MoveHistory::bounded(MEMORY_WINDOW),
            },
            Variant::Blind => VariantRules::Blind {
                first_moves: Vec::with_capacity(BLIND_VISIBLE_MOVES),
            },
        }
    }

    /// The variant these rules implement.
    pub fn variant(&self) -> Variant {
        match self {
            VariantRules::Classic => Variant::Classic,
            VariantRules::LimitedMemory { .. } => Variant::LimitedMemory,
            VariantRules::Blind { .. } => Variant::Blind,
        }
    }

    /// Handling of invalid proposals.
    pub fn invalid_move_policy(&self) -> InvalidMovePolicy {
        match self {
            VariantRules::Blind { .. } => InvalidMovePolicy::Forfeit,
            _ => InvalidMovePolicy::Retry,
        }
    }

    /// Whether players should get no visual feedback while choosing a move.
    pub fn hides_board(&self) -> bool {
        matches!(self, VariantRules::Blind { .. })
    }

    /// Runs before a validated move is placed.
    ///
    /// Limited memory erases the cell of the move that falls out of the
    /// window and returns that move. Blind records each player's first
    /// applied move.
    #[instrument(skip(self, board))]
    pub fn before_move(&mut self, mv: Move, board: &mut Board) -> Option<Move> {
        match self {
            VariantRules::Classic => None,
            VariantRules::LimitedMemory { memory } => {
                let erased = memory.push(mv)?;
                board.place(erased.cell, Square::Empty);
                debug!(%erased, "Erased move outside the memory window");
                Some(erased)
            }
            VariantRules::Blind { first_moves } => {
                let seen = first_moves.iter().any(|first| first.player == mv.player);
                if !seen && first_moves.len() < BLIND_VISIBLE_MOVES {
                    first_moves.push(mv);
                }
                None
            }
        }
    }

    /// The board as players are allowed to see it.
    #[instrument(skip(self, actual))]
    pub fn visible_board(&self, actual: &Board) -> Board {
        match self {
            VariantRules::Blind { first_moves } => {
                let mut visible = Board::new();
                for mv in first_moves {
                    visible.place(mv.cell, Square::Occupied(mv.player));
                }
                visible
            }
            _ => actual.clone(),
        }
    }

    /// First moves recorded for the blind reveal; empty for other variants.
    pub fn first_moves(&self) -> &[Move] {
        match self {
            VariantRules::Blind { first_moves } => first_moves,
            _ => &[],
        }
    }
}
