//! Tic-Tac-Toe game implementation

pub mod action;
pub mod board;
pub mod game;
pub mod lines;

pub use action::Action;
pub use board::{Board, Cell, Player};
pub use game::{Game, GameOutcome};
pub use lines::{LineAnalyzer, WINNING_LINES};
