//! Strategy backed by an external move source, usually a person.

use tracing::{debug, instrument};

use super::{BoardView, Strategy};
use crate::action::StrategyError;

/// Answer from a [`MoveSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proposal {
    /// A well-formed cell number. It may still be out of range or taken.
    Cell(i32),
    /// Input was malformed; ask again.
    Retry,
}

/// Collaborator that asks someone for a move.
pub trait MoveSource {
    /// Requests a cell for `view.player()`. Blocks until an answer arrives.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InputClosed`] when no more input can arrive.
    fn request_move(&mut self, view: &BoardView<'_>) -> Result<Proposal, StrategyError>;
}

/// Forwards move requests to a [`MoveSource`], re-asking on malformed input.
#[derive(Debug, Clone)]
pub struct InteractiveStrategy<S> {
    source: S,
}

impl<S: MoveSource> InteractiveStrategy<S> {
    /// Wraps a move source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: MoveSource> Strategy for InteractiveStrategy<S> {
    #[instrument(skip(self, view), fields(player = %view.player(), hidden = view.hide_moves()))]
    fn propose_move(&mut self, view: &BoardView<'_>) -> Result<i32, StrategyError> {
        loop {
            match self.source.request_move(view)? {
                Proposal::Cell(number) => return Ok(number),
                Proposal::Retry => debug!("Malformed input, asking again"),
            }
        }
    }

    fn name(&self) -> &str {
        "interactive"
    }
}
