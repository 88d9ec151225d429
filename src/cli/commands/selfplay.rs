//! Selfplay command - optimal against optimal from a given position

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::OptimalAgent,
    cli::output::{format_board, print_kv, print_section},
    ports::Agent,
    tictactoe::{Action, Board, Game, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play the optimal agent against itself")]
pub struct SelfplayArgs {
    /// Starting board (9 cells, row-major). Defaults to the empty board.
    pub board: Option<String>,
}

/// Play `x` against `o` from `board` to the end.
///
/// Returns the outcome and the number of moves made from `board`.
pub fn run_selfplay(
    board: Board,
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    mut on_move: impl FnMut(Player, Action, &Board),
) -> crate::Result<(GameOutcome, usize)> {
    let mut plies = 0;
    let outcome = Game::from_board(board).play_out(x, o, |player, action, next| {
        plies += 1;
        on_move(player, action, next);
    })?;
    Ok((outcome, plies))
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let board = super::parse_board_arg(args.board.as_deref())?;

    let mut x = OptimalAgent::with_name("optimal-x".to_string());
    let mut o = OptimalAgent::with_name("optimal-o".to_string());

    print_section("Optimal self-play");
    print_kv("X", x.name());
    print_kv("O", o.name());
    println!();
    print!("{}", format_board(&board));

    let mut ply = board.occupied_count();
    let (outcome, plies) = run_selfplay(board, &mut x, &mut o, |player, action, next| {
        ply += 1;
        println!("\nMove {ply}: {player} plays {action}");
        print!("{}", format_board(next));
    })?;

    println!();
    let result = match outcome {
        GameOutcome::Win(player) => format!("{player} wins"),
        GameOutcome::Draw => "draw".to_string(),
    };
    print_kv("Result", &result);
    print_kv("Moves played", &plies.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selfplay_from_empty_board_draws() {
        let mut x = OptimalAgent::new();
        let mut o = OptimalAgent::new();
        let mut movers = Vec::new();
        let (outcome, plies) =
            run_selfplay(Board::new(), &mut x, &mut o, |player, _, _| movers.push(player))
                .unwrap();
        assert_eq!(outcome, GameOutcome::Draw);
        assert_eq!(plies, 9);
        assert_eq!(movers[0], Player::X);
        assert_eq!(movers[1], Player::O);
    }

    #[test]
    fn selfplay_on_terminal_board_makes_no_moves() {
        let board = Board::from_string("XXX/OO./...").unwrap();
        let mut x = OptimalAgent::new();
        let mut o = OptimalAgent::new();
        let (outcome, plies) = run_selfplay(board, &mut x, &mut o, |_, _, _| {
            panic!("no move expected on a finished board");
        })
        .unwrap();
        assert_eq!(outcome, GameOutcome::Win(Player::X));
        assert_eq!(plies, 0);
    }

    #[test]
    fn selfplay_finishes_a_won_position() {
        // X to move completes the top row
        let board = Board::from_string("XX./OO./...").unwrap();
        let mut x = OptimalAgent::new();
        let mut o = OptimalAgent::new();
        let (outcome, plies) = run_selfplay(board, &mut x, &mut o, |_, _, _| {}).unwrap();
        assert_eq!(outcome, GameOutcome::Win(Player::X));
        assert_eq!(plies, 1);
    }
}
