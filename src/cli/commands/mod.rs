//! Subcommands of the `noughts` binary

pub mod analyze;
pub mod evaluate;
pub mod selfplay;

use anyhow::{Context, Result};

use crate::tictactoe::Board;

/// Parse an optional board argument, defaulting to the empty board
pub(crate) fn parse_board_arg(board: Option<&str>) -> Result<Board> {
    match board {
        Some(s) => Board::from_string(s).with_context(|| format!("invalid board '{s}'")),
        None => Ok(Board::new()),
    }
}
