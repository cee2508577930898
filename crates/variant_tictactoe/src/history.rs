//! Ordered move history with an optional size limit.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::Move;

/// Ordered sequence of moves, oldest first.
///
/// A bounded history keeps at most `capacity` moves and hands back the
/// oldest one when a push overflows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: VecDeque<Move>,
    capacity: Option<usize>,
}

impl MoveHistory {
    /// History that never evicts.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// History that keeps the `capacity` most recent moves.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            moves: VecDeque::with_capacity(capacity + 1),
            capacity: Some(capacity),
        }
    }

    /// Appends a move, returning the evicted oldest move on overflow.
    pub fn push(&mut self, mv: Move) -> Option<Move> {
        self.moves.push_back(mv);
        match self.capacity {
            Some(capacity) if self.moves.len() > capacity => {
                let evicted = self.moves.pop_front();
                debug!(?evicted, "Evicted oldest move");
                evicted
            }
            _ => None,
        }
    }

    /// Maximum number of retained moves, if bounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Number of retained moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True if no move is retained.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The oldest retained move.
    pub fn oldest(&self) -> Option<&Move> {
        self.moves.front()
    }

    /// The most recent move.
    pub fn latest(&self) -> Option<&Move> {
        self.moves.back()
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a MoveHistory {
    type Item = &'a Move;
    type IntoIter = std::collections::vec_deque::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
