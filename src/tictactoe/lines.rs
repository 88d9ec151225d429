//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8], // \
    [2, 4, 6], // /
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Owner of the first fully matched line in scan order.
    ///
    /// Boards with two winners cannot arise from legal play; for those the
    /// earlier line in [`WINNING_LINES`] decides.
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        WINNING_LINES.iter().find_map(|line| Self::line_owner(cells, line))
    }

    fn line_owner(cells: &[Cell; 9], line: &[usize; 3]) -> Option<Player> {
        let [a, b, c] = *line;
        if cells[a] == cells[b] && cells[b] == cells[c] {
            cells[a].to_player()
        } else {
            None
        }
    }
}
