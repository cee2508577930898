//! Tic-tac-toe game engine with pluggable variants and player strategies.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Square`]s addressed by `(row, col)` or by [`Cell`] number
//! - **Rules**: stateless win and tie detection ([`check_win`], [`check_tie`])
//! - **Variants**: classic, limited memory and blind rule sets ([`Variant`], [`VariantRules`])
//! - **Strategies**: anything that proposes a move ([`Strategy`])
//! - **Engine**: the turn state machine ([`GameEngine`])
//!
//! # Example
//!
//! ```
//! use variant_tictactoe::{GameEngine, Player, RandomStrategy, Seat, Variant};
//!
//! let mut game = GameEngine::with_first(
//!     Variant::Classic,
//!     Seat::new("Ada", Player::X, RandomStrategy::seeded(1)),
//!     Seat::new("Bob", Player::O, RandomStrategy::seeded(2)),
//!     Player::X,
//! )?;
//!
//! while !game.is_over() {
//!     game.play_turn()?;
//! }
//! println!("{}", game.outcome().expect("finished game has an outcome"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cell;
mod engine;
mod history;
pub mod rules;
mod strategy;
mod types;
mod variant;

pub use action::{Move, MoveError, PlayError, SetupError, StrategyError};
pub use cell::Cell;
pub use engine::{GameEngine, GameStatus, Outcome, Rejection, Reveal, Seat, TurnAction, TurnReport};
pub use history::MoveHistory;
pub use rules::{check_tie, check_win, winner};
pub use strategy::{
    BoardView, InteractiveStrategy, MoveSource, OpponentKind, Proposal, RandomStrategy,
    ScriptedStrategy, Strategy,
};
pub use types::{Board, Player, Square};
pub use variant::{BLIND_VISIBLE_MOVES, InvalidMovePolicy, MEMORY_WINDOW, Variant, VariantRules};
