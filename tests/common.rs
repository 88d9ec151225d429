//! Common test utilities for the noughts test suite.
//!
//! Helpers to build boards from move lists and to walk every position
//! reachable by legal play.

#![allow(dead_code)]

use std::collections::HashSet;

use noughts::{Action, Board};

/// Apply `(row, col)` moves in order from the empty board.
pub fn play(moves: &[(usize, usize)]) -> Board {
    moves.iter().fold(Board::new(), |board, &(row, col)| {
        board
            .apply_action(Action::new(row, col))
            .unwrap_or_else(|e| panic!("move ({row}, {col}) rejected on\n{board}\n: {e}"))
    })
}

/// Every distinct board reachable from the empty board, terminal ones included.
///
/// Play stops at terminal boards, so this is the 5,478 legal positions.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if board.is_terminal() {
            continue;
        }
        for action in board.legal_actions() {
            stack.push(board.apply_action(action).expect("legal action"));
        }
    }

    boards
}

/// Pick a legal move from an arbitrary index so random sequences stay legal.
pub fn nth_legal(board: &Board, n: usize) -> Option<Action> {
    let actions = board.legal_actions();
    if actions.is_empty() || board.is_terminal() {
        None
    } else {
        Some(actions[n % actions.len()])
    }
}
