//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{action::Action, lines::LineAnalyzer};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

/// A 3x3 position.
///
/// Boards are small `Copy` values and are never mutated once built: every
/// move produces a fresh board through [`Board::apply_action`]. The player
/// to move is not stored; it is derived from the mark counts, which is only
/// meaningful for boards reached by alternating play from the empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create the empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Wrap raw cells without validation.
    ///
    /// Turn order and the query methods assume the cells came from legal
    /// play; use [`Board::from_string`] for checked construction.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Helper: Parse 9 cells from a slice of characters.
    ///
    /// # Errors
    ///
    /// Returns error unless there are exactly 9 characters, all valid cells.
    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9], crate::Error> {
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    /// Helper: Count pieces on the board.
    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters in row-major order.
    /// Whitespace, `|` and `/` are ignored so that `"X.O/...|..."` style row
    /// separators can be used.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board does not have exactly 9 cell characters
    /// - Any character is not a valid cell representation
    /// - X does not have the same number of marks as O or exactly one more
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();
        let cells = Self::parse_cells(&chars, s)?;
        let count = Self::count_pieces(&cells);

        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(Board { cells })
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// Get the cell at an action's coordinates, `None` when off the board
    pub fn get(&self, action: Action) -> Option<Cell> {
        action.index().map(|idx| self.cells[idx])
    }

    /// Check if the cell at `action` is on the board and empty
    pub fn is_empty(&self, action: Action) -> bool {
        self.get(action) == Some(Cell::Empty)
    }

    /// The player to move next.
    ///
    /// X moves whenever the counts are level, so X opens on the empty board.
    pub fn current_player(&self) -> Player {
        let count = Self::count_pieces(&self.cells);
        if count.x > count.o {
            Player::O
        } else {
            Player::X
        }
    }

    /// Every empty cell in row-major order.
    ///
    /// The order is fixed; the search relies on it for its tie-break.
    pub fn legal_actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|&action| self.is_empty(action))
            .collect()
    }

    /// Mark `action` for the player to move and return the new board
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAction`] if the cell is occupied or off
    /// the board.
    #[must_use = "apply_action returns a new board; the original is unchanged"]
    pub fn apply_action(&self, action: Action) -> Result<Board, crate::Error> {
        let idx = match action.index() {
            Some(idx) if self.cells[idx] == Cell::Empty => idx,
            _ => {
                return Err(crate::Error::InvalidAction {
                    row: action.row,
                    col: action.col,
                });
            }
        };

        Ok(self.with_mark(idx, self.current_player().to_cell()))
    }

    /// Every legal action paired with the board it leads to, in
    /// [`Board::legal_actions`] order
    pub fn successors(&self) -> impl Iterator<Item = (Action, Board)> + '_ {
        let mark = self.current_player().to_cell();
        Action::ALL
            .into_iter()
            .enumerate()
            .filter(move |&(idx, _)| self.cells[idx] == Cell::Empty)
            .map(move |(idx, action)| (action, self.with_mark(idx, mark)))
    }

    fn with_mark(&self, idx: usize, mark: Cell) -> Board {
        let mut next = *self;
        next.cells[idx] = mark;
        next
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Outcome from X's point of view: `1` X won, `-1` O won, `0` otherwise.
    ///
    /// Only meaningful on terminal boards.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Compact single-line encoding, e.g. `"XO......."`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
