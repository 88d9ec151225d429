//! Uniformly random baseline agent

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Agent,
    tictactoe::{Action, Board},
};

/// Picks any legal action with equal probability
#[derive(Debug)]
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new() -> Self {
        Self::with_seed(random())
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            name: "random".to_string(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        if board.is_terminal() {
            return Err(Error::NoLegalActions);
        }
        let actions = board.legal_actions();
        let index = self.rng.random_range(0..actions.len());
        Ok(actions[index])
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_picks_legal_actions() {
        let board = Board::from_string("XO./X../O..").unwrap();
        let legal = board.legal_actions();
        let mut agent = RandomAgent::with_seed(7);
        for _ in 0..50 {
            assert!(legal.contains(&agent.select_action(&board).unwrap()));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        for _ in 0..10 {
            assert_eq!(
                a.select_action(&board).unwrap(),
                b.select_action(&board).unwrap()
            );
        }
    }

    #[test]
    fn terminal_board_is_an_error() {
        let board = Board::from_string("XXX/OO./...").unwrap();
        assert!(matches!(
            RandomAgent::with_seed(1).select_action(&board),
            Err(Error::NoLegalActions)
        ));
    }
}
