//! Board coordinates

use std::fmt;

use serde::{Deserialize, Serialize};

/// A move: the zero-based row and column of the cell to mark.
///
/// Coordinates outside `0..3` are representable so that callers can hand
/// arbitrary input to [`Board::apply_action`](super::Board::apply_action),
/// which rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    /// Every cell in row-major order
    pub const ALL: [Action; 9] = [
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 0),
        Action::new(1, 1),
        Action::new(1, 2),
        Action::new(2, 0),
        Action::new(2, 1),
        Action::new(2, 2),
    ];

    pub const fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    /// Row-major cell index, or `None` when off the board
    pub fn index(self) -> Option<usize> {
        if self.row < 3 && self.col < 3 {
            Some(self.row * 3 + self.col)
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Action::new(row, col)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
