//! Plain minimax without pruning
//!
//! Slower than [`AlphaBeta`](super::AlphaBeta) but returns the exact value of
//! every legal action, which is what listing all equally good moves needs.

use std::collections::HashMap;

use crate::tictactoe::{Action, Board, Player};

/// Memoized minimax evaluator
#[derive(Debug, Default)]
pub struct Minimax {
    cache: HashMap<Board, i32>,
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Game value of `board` under optimal play (X's point of view)
    pub fn value(&mut self, board: &Board) -> i32 {
        if let Some(&value) = self.cache.get(board) {
            return value;
        }

        if board.is_terminal() {
            let value = board.utility();
            self.cache.insert(*board, value);
            return value;
        }

        let maximizing = board.current_player() == Player::X;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for (_, next) in board.successors() {
            let value = self.value(&next);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        self.cache.insert(*board, best);
        best
    }

    /// Evaluate every legal action in the given board and return its minimax value.
    pub fn evaluate_actions(&mut self, board: &Board) -> Vec<(Action, i32)> {
        if board.is_terminal() {
            return Vec::new();
        }
        board
            .successors()
            .map(|(action, next)| (action, self.value(&next)))
            .collect()
    }

    /// Every action achieving the optimal value, in enumeration order
    pub fn optimal_actions(&mut self, board: &Board) -> Vec<Action> {
        let values = self.evaluate_actions(board);
        let best = match board.current_player() {
            Player::X => values.iter().map(|&(_, v)| v).max(),
            Player::O => values.iter().map(|&(_, v)| v).min(),
        };
        values
            .into_iter()
            .filter(|&(_, v)| Some(v) == best)
            .map(|(action, _)| action)
            .collect()
    }
}
