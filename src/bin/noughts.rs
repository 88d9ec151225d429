//! noughts CLI - optimal tic-tac-toe analysis
//!
//! This CLI provides:
//! - Optimal move and game value for any reachable position
//! - Optimal self-play traces
//! - Evaluation of the optimal agent against random play

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use noughts::cli::{commands, config::CommonConfig, init_tracing};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Minimax tic-tac-toe solver", long_about = None)]
struct Cli {
    /// JSON file with shared settings (seed, progress, verbose)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log search details to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the optimal move for a position
    Analyze(commands::analyze::AnalyzeArgs),

    /// Play the optimal agent against itself
    Selfplay(commands::selfplay::SelfplayArgs),

    /// Evaluate the optimal agent against random play
    Evaluate(commands::evaluate::EvaluateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut common = match &cli.config {
        Some(path) => CommonConfig::load(path)?,
        None => CommonConfig::default(),
    };
    common.verbose |= cli.verbose;
    init_tracing(common.verbose);

    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args),
        Commands::Selfplay(args) => commands::selfplay::execute(args),
        Commands::Evaluate(args) => commands::evaluate::execute(args, &common),
    }
}
