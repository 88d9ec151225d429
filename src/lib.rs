//! Optimal tic-tac-toe play
//!
//! This crate provides:
//! - An immutable 3x3 board with turn, win and terminal queries
//! - Minimax search with alpha-beta pruning for the player to move
//! - Agents (optimal and random) and a game driver built on them
//! - The `noughts` command-line tool for analysis and self-play
//!
//! The free functions below are the whole surface most callers need:
//!
//! ```
//! use noughts::{apply_action, initial_state, is_terminal, optimal_move};
//!
//! let mut board = initial_state();
//! while let Some(action) = optimal_move(&board) {
//!     board = apply_action(&board, action).unwrap();
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(noughts::winner(&board), None);
//! ```

pub mod adapters;
pub mod cli;
pub mod error;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::optimal_move;
pub use tictactoe::{Action, Board, Cell, Game, GameOutcome, Player};

/// The empty board, X to move
pub fn initial_state() -> Board {
    Board::new()
}

/// The player whose turn it is
pub fn current_player(board: &Board) -> Player {
    board.current_player()
}

/// Empty cells in row-major order
pub fn legal_actions(board: &Board) -> Vec<Action> {
    board.legal_actions()
}

/// The board after the player to move marks `action`
///
/// # Errors
///
/// Returns [`Error::InvalidAction`] if the cell is occupied or off the board.
pub fn apply_action(board: &Board, action: Action) -> Result<Board> {
    board.apply_action(action)
}

/// Owner of a completed line, if any
pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

/// Whether the game is over
pub fn is_terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// `1` if X won, `-1` if O won, `0` otherwise. Expects a terminal board.
pub fn utility(board: &Board) -> i32 {
    board.utility()
}
