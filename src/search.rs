//! Game-tree search

pub mod alpha_beta;
pub mod minimax;

pub use alpha_beta::{AlphaBeta, SearchOutcome, SearchStats};
pub use minimax::Minimax;

use crate::tictactoe::{Action, Board};

/// Optimal action for the player to move, `None` on terminal boards
pub fn optimal_move(board: &Board) -> Option<Action> {
    AlphaBeta::new().optimal_move(board)
}
