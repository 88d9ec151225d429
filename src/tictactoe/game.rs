//! High-level game management

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    action::Action,
    board::{Board, Player},
};
use crate::ports::Agent;

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Classify a board, or `None` while the game is still running
    pub fn of(board: &Board) -> Option<Self> {
        if let Some(winner) = board.winner() {
            Some(GameOutcome::Win(winner))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Signed value from X's point of view
    pub fn utility(self) -> i32 {
        match self {
            GameOutcome::Win(Player::X) => 1,
            GameOutcome::Win(Player::O) => -1,
            GameOutcome::Draw => 0,
        }
    }
}

/// A game in progress.
///
/// Only the current board is kept; there is no move list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Continue a game from an existing position
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            outcome: GameOutcome::of(&board),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play a move for whoever is to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has ended and
    /// [`crate::Error::InvalidAction`] for occupied or off-board cells.
    pub fn play(&mut self, action: Action) -> Result<Option<GameOutcome>, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.board.current_player();
        self.board = self.board.apply_action(action)?;
        self.outcome = GameOutcome::of(&self.board);
        debug!(%player, %action, board = %self.board.encode(), "move applied");

        if let Some(outcome) = self.outcome {
            debug!(?outcome, "game finished");
        }
        Ok(self.outcome)
    }

    /// Let two agents alternate until the game ends.
    ///
    /// `on_move` sees every position after a move, including the last.
    pub fn play_out<F>(
        &mut self,
        x: &mut dyn Agent,
        o: &mut dyn Agent,
        mut on_move: F,
    ) -> Result<GameOutcome, crate::Error>
    where
        F: FnMut(Player, Action, &Board),
    {
        loop {
            if let Some(outcome) = self.outcome {
                return Ok(outcome);
            }
            let player = self.board.current_player();
            let (action, agent) = match player {
                Player::X => (x.select_action(&self.board)?, x.name()),
                Player::O => (o.select_action(&self.board)?, o.name()),
            };
            debug!(agent, %player, %action, "agent chose");
            self.play(action)?;
            on_move(player, action, &self.board);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{OptimalAgent, RandomAgent};

    #[test]
    fn new_game_is_running() {
        let game = Game::new();
        assert!(!game.is_over());
        assert_eq!(game.outcome(), None);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn play_reports_win_and_then_rejects_moves() {
        let mut game = Game::new();
        for action in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert_eq!(game.play(action.into()).unwrap(), None);
        }
        assert_eq!(
            game.play(Action::new(0, 2)).unwrap(),
            Some(GameOutcome::Win(Player::X))
        );
        assert!(matches!(
            game.play(Action::new(2, 2)),
            Err(crate::Error::GameOver)
        ));
    }

    #[test]
    fn play_surfaces_invalid_action() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        assert!(matches!(
            game.play(Action::new(1, 1)),
            Err(crate::Error::InvalidAction { row: 1, col: 1 })
        ));
        // Failed move leaves the game unchanged
        assert_eq!(game.board().occupied_count(), 1);
    }

    #[test]
    fn outcome_utility_matches_board_utility() {
        assert_eq!(GameOutcome::Win(Player::X).utility(), 1);
        assert_eq!(GameOutcome::Win(Player::O).utility(), -1);
        assert_eq!(GameOutcome::Draw.utility(), 0);
    }

    #[test]
    fn from_terminal_board_is_over() {
        let board = Board::from_string("XXX/OO./...").unwrap();
        let game = Game::from_board(board);
        assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::X)));
    }

    #[test]
    fn optimal_self_play_is_a_draw() {
        let mut x = OptimalAgent::new();
        let mut o = OptimalAgent::new();
        let mut plies = 0;
        let outcome = Game::new()
            .play_out(&mut x, &mut o, |_, _, _| plies += 1)
            .unwrap();
        assert_eq!(outcome, GameOutcome::Draw);
        assert_eq!(plies, 9);
    }

    #[test]
    fn optimal_never_loses_to_random() {
        for seed in 0..20 {
            let mut optimal = OptimalAgent::new();
            let mut random = RandomAgent::with_seed(seed);
            let outcome = Game::new()
                .play_out(&mut optimal, &mut random, |_, _, _| {})
                .unwrap();
            assert_ne!(outcome, GameOutcome::Win(Player::O), "seed {seed}");
        }
    }
}
