//! Minimax agent

use crate::{
    Error, Result,
    ports::Agent,
    search::{AlphaBeta, SearchStats},
    tictactoe::{Action, Board},
};

/// Plays the alpha-beta optimal move
#[derive(Debug)]
pub struct OptimalAgent {
    name: String,
    search: AlphaBeta,
}

impl OptimalAgent {
    pub fn new() -> Self {
        Self::with_name("optimal".to_string())
    }

    pub fn with_name(name: String) -> Self {
        Self {
            name,
            search: AlphaBeta::new(),
        }
    }

    /// Statistics of the last move selection
    pub fn last_stats(&self) -> SearchStats {
        self.search.stats()
    }
}

impl Default for OptimalAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for OptimalAgent {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        self.search
            .optimal_move(board)
            .ok_or(Error::NoLegalActions)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
