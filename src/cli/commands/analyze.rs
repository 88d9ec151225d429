//! Analyze command - optimal move and game value for a position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{describe_value, format_board, print_kv, print_section, print_subsection},
    search::{AlphaBeta, Minimax, SearchStats},
    tictactoe::{Action, Board, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Find the optimal move for a position")]
pub struct AnalyzeArgs {
    /// Board as 9 cells in row-major order ('.', 'X', 'O'; '/' and '|' may separate rows).
    /// Defaults to the empty board.
    pub board: Option<String>,

    /// Also list the minimax value of every legal action
    #[arg(long)]
    pub all: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct ActionValue {
    pub action: Action,
    pub value: i32,
    pub optimal: bool,
}

/// Everything the command reports about one position
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub board: String,
    pub to_move: Player,
    pub outcome: Option<GameOutcome>,
    pub optimal_move: Option<Action>,
    pub value: i32,
    pub stats: SearchStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<ActionValue>>,
}

/// Search `board` and collect the report
pub fn analyze_board(board: &Board, all: bool) -> AnalysisReport {
    let outcome = AlphaBeta::new().search(board);

    let actions = all.then(|| {
        let mut minimax = Minimax::new();
        let optimal = minimax.optimal_actions(board);
        minimax
            .evaluate_actions(board)
            .into_iter()
            .map(|(action, value)| ActionValue {
                action,
                value,
                optimal: optimal.contains(&action),
            })
            .collect()
    });

    AnalysisReport {
        board: board.encode(),
        to_move: board.current_player(),
        outcome: GameOutcome::of(board),
        optimal_move: outcome.action,
        value: outcome.value,
        stats: outcome.stats,
        actions,
    }
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = super::parse_board_arg(args.board.as_deref())?;
    let report = analyze_board(&board, args.all);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Position");
    print!("{}", format_board(&board));

    if let Some(outcome) = report.outcome {
        let result = match outcome {
            GameOutcome::Win(player) => format!("{player} has won"),
            GameOutcome::Draw => "draw".to_string(),
        };
        print_kv("Game over", &result);
        return Ok(());
    }

    print_kv("To move", &report.to_move.to_string());
    if let Some(action) = report.optimal_move {
        print_kv("Optimal move", &action.to_string());
    }
    print_kv(
        "Value",
        &format!("{} ({})", report.value, describe_value(report.value)),
    );
    print_kv("Nodes searched", &report.stats.nodes.to_string());
    print_kv("Cutoffs", &report.stats.cutoffs.to_string());

    if let Some(actions) = &report.actions {
        print_subsection("All legal actions");
        for entry in actions {
            let marker = if entry.optimal { "*" } else { " " };
            println!(
                "  {marker} {} -> {:>2} ({})",
                entry.action,
                entry.value,
                describe_value(entry.value)
            );
        }
    }

    Ok(())
}
