//! Agent port - anything that picks a move for a board
//!
//! The game driver and the CLI commands only talk to this trait, so the
//! optimal searcher and the random baseline are interchangeable.

use crate::{
    Result,
    tictactoe::{Action, Board},
};

/// Move selection for whichever player is to act on the board
pub trait Agent {
    /// Choose an action for the player to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoLegalActions`] when the board is terminal.
    fn select_action(&mut self, board: &Board) -> Result<Action>;

    /// Name used in reports and logs
    fn name(&self) -> &str;
}
