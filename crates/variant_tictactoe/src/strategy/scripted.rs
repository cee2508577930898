//! Strategy replaying a fixed list of proposals.

use std::collections::VecDeque;

use super::{BoardView, Strategy};
use crate::action::StrategyError;

/// Replays proposals in order, then reports closed input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedStrategy {
    proposals: VecDeque<i32>,
}

impl ScriptedStrategy {
    /// Creates a strategy that will propose `proposals` in order.
    pub fn new(proposals: impl IntoIterator<Item = i32>) -> Self {
        Self {
            proposals: proposals.into_iter().collect(),
        }
    }

    /// Proposals not yet used.
    pub fn remaining(&self) -> usize {
        self.proposals.len()
    }
}

impl Strategy for ScriptedStrategy {
    fn propose_move(&mut self, _view: &BoardView<'_>) -> Result<i32, StrategyError> {
        self.proposals
            .pop_front()
            .ok_or_else(|| StrategyError::InputClosed("script exhausted".to_string()))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
