//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::{self, WinPattern};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
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
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game. Doubles as the mark written to a cell.
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
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

/// Nine cells indexed 0-8, row-major.
///
/// Boards are plain values: every operation that places a mark returns a new
/// board and leaves the receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Parse a board from its text form.
    ///
    /// Accepts exactly nine cell characters (`.`/`-` empty, `X`, `O`); row
    /// separators `/`, `|` and whitespace are ignored. Piece counts are not
    /// checked here, see [`Board::validate`].
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not nine or a character is invalid.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Count pieces on the board.
    pub fn piece_count(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.piece_count();
        count.x + count.o
    }

    /// A board is well-formed when X has as many marks as O or exactly one more.
    pub fn is_well_formed(&self) -> bool {
        let count = self.piece_count();
        count.x == count.o || count.x == count.o + 1
    }

    /// Check well-formedness, reporting the offending counts.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.is_well_formed() {
            Ok(())
        } else {
            let count = self.piece_count();
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Whose turn it is under X-first alternation.
    ///
    /// # Errors
    ///
    /// Returns error if the board is not well-formed.
    pub fn next_player(&self) -> Result<Player, crate::Error> {
        self.validate()?;
        let count = self.piece_count();
        Ok(if count.x == count.o {
            Player::X
        } else {
            Player::O
        })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Get all empty positions in increasing order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// No empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Place `player`'s mark at `pos` and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] for `pos >= 9` and
    /// [`crate::Error::InvalidMove`] if the cell is occupied.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, pos: usize, player: Player) -> Result<Board, crate::Error> {
        match self.get(pos) {
            None => Err(crate::Error::InvalidPosition { position: pos }),
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[pos] = player.to_cell();
                Ok(next)
            }
            Some(_) => Err(crate::Error::InvalidMove { position: pos }),
        }
    }

    /// Check if a player has completed a line
    pub fn has_won(&self, player: Player) -> bool {
        lines::has_won(&self.cells, player)
    }

    /// The first completed line for `player`, if any
    pub fn winning_pattern(&self, player: Player) -> Option<WinPattern> {
        lines::winning_pattern(&self.cells, player)
    }

    /// Get the winner if there is one. X is checked first.
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.has_won(Player::X) || self.has_won(Player::O) || self.is_full()
    }

    /// Compact nine-character encoding, e.g. `XX.OO....`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
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
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = chunk.iter().map(|c| c.to_char().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
