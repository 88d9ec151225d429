//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Action, Board, Cell};

/// Create a progress bar counting finished games
pub fn create_game_progress(total_games: u64) -> crate::Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .map_err(|e| crate::Error::ProgressBarTemplate {
                message: e.to_string(),
            })?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a board as a grid with row and column numbers
pub fn format_board(board: &Board) -> String {
    let mut out = String::from("    0   1   2\n");
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| match board.get(Action::new(row, col)) {
                Some(Cell::Empty) | None => " ".to_string(),
                Some(cell) => cell.to_char().to_string(),
            })
            .collect();
        out.push_str(&format!("{row}   {}\n", cells.join(" | ")));
        if row < 2 {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}

/// Describe a game value from X's point of view
pub fn describe_value(value: i32) -> &'static str {
    match value.signum() {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_grid_shows_marks_and_guides() {
        let board = Board::from_string("X../.O./...").unwrap();
        let text = format_board(&board);
        assert!(text.starts_with("    0   1   2\n"));
        assert!(text.contains("0   X |   |  \n"));
        assert!(text.contains("1     | O |  \n"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn values_are_described_from_x_side() {
        assert_eq!(describe_value(1), "X wins");
        assert_eq!(describe_value(-1), "O wins");
        assert_eq!(describe_value(0), "draw");
    }
}
