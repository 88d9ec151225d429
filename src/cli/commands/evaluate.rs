//! Evaluate command - optimal agent against a random baseline

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::random;
use serde::Serialize;
use tracing::info;

use crate::{
    adapters::{OptimalAgent, RandomAgent},
    cli::{
        config::CommonConfig,
        output::{create_game_progress, print_kv, print_section},
    },
    tictactoe::{Game, GameOutcome, Player},
};

/// Token controlled by the optimal agent
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Side {
    /// Play X and move first
    X,
    /// Play O and move second
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Evaluate the optimal agent against random play")]
pub struct EvaluateArgs {
    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which token the optimal agent controls
    #[arg(long, value_enum, default_value_t = Side::X)]
    pub optimal_as: Side,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Tally of finished games from the optimal agent's side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationSummary {
    pub optimal_as: Option<Player>,
    pub seed: u64,
    pub games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl EvaluationSummary {
    fn record(&mut self, outcome: GameOutcome, optimal: Player) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(winner) if winner == optimal => self.wins += 1,
            GameOutcome::Win(_) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// Play `games` games between the optimal agent and a seeded random agent
pub fn run_evaluation(
    games: usize,
    seed: u64,
    optimal_as: Player,
    mut on_game: impl FnMut(&EvaluationSummary),
) -> crate::Result<EvaluationSummary> {
    let mut optimal = OptimalAgent::new();
    let mut baseline = RandomAgent::with_seed(seed);
    let mut summary = EvaluationSummary {
        optimal_as: Some(optimal_as),
        seed,
        ..EvaluationSummary::default()
    };

    for _ in 0..games {
        let outcome = match optimal_as {
            Player::X => Game::new().play_out(&mut optimal, &mut baseline, |_, _, _| {})?,
            Player::O => Game::new().play_out(&mut baseline, &mut optimal, |_, _, _| {})?,
        };
        summary.record(outcome, optimal_as);
        on_game(&summary);
    }

    Ok(summary)
}

pub fn execute(args: EvaluateArgs, common: &CommonConfig) -> Result<()> {
    let optimal_as = Player::from(args.optimal_as);
    let seed = args.seed.or(common.seed).unwrap_or_else(random);
    let show_progress = common.progress && !args.no_progress;

    info!(games = args.games, seed, %optimal_as, "starting evaluation");

    let progress = if show_progress {
        Some(create_game_progress(args.games as u64)?)
    } else {
        None
    };

    let summary = run_evaluation(args.games, seed, optimal_as, |tally| {
        if let Some(pb) = &progress {
            pb.set_position(tally.games as u64);
            pb.set_message(format!(
                "W:{} D:{} L:{}",
                tally.wins, tally.draws, tally.losses
            ));
        }
    })?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    print_section("Optimal vs random");
    print_kv("Optimal plays", &optimal_as.to_string());
    print_kv("Seed", &seed.to_string());
    print_kv("Games", &summary.games.to_string());
    print_kv("Wins", &summary.wins.to_string());
    print_kv("Draws", &summary.draws.to_string());
    print_kv("Losses", &summary.losses.to_string());

    if let Some(path) = args.export {
        let json = serde_json::to_string_pretty(&summary)?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write results to {}", path.display()))?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimal_never_loses_either_side() {
        for side in [Player::X, Player::O] {
            let summary = run_evaluation(25, 3, side, |_| {}).unwrap();
            assert_eq!(summary.games, 25);
            assert_eq!(summary.losses, 0, "optimal lost as {side}");
            assert_eq!(summary.wins + summary.draws, 25);
        }
    }

    #[test]
    fn evaluation_is_reproducible() {
        let a = run_evaluation(10, 99, Player::X, |_| {}).unwrap();
        let b = run_evaluation(10, 99, Player::X, |_| {}).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn callback_sees_every_game() {
        let mut seen = Vec::new();
        run_evaluation(4, 1, Player::O, |tally| seen.push(tally.games)).unwrap();
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn optimal_as_accepts_only_x_or_o() {
        let args = EvaluateArgs::try_parse_from(["evaluate"]).unwrap();
        assert_eq!(args.optimal_as, Side::X);

        let args = EvaluateArgs::try_parse_from(["evaluate", "--optimal-as", "o"]).unwrap();
        assert_eq!(Player::from(args.optimal_as), Player::O);

        for bad in ["first", "second", "z"] {
            assert!(
                EvaluateArgs::try_parse_from(["evaluate", "--optimal-as", bad]).is_err(),
                "accepted {bad}"
            );
        }
    }
}
