//! Core domain types for the 3x3 board.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// One of the two marks placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (scores positive).
    X,
    /// Mark O (scores negative).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Wire representation of the mark.
    pub fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    Empty,
    /// Cell occupied by a mark.
    Taken(Mark),
}

/// A (row, column) coordinate on the board, each in 0..3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index (0 = top).
    pub row: usize,
    /// Column index (0 = left).
    pub col: usize,
}

impl Move {
    /// Creates a move at the given coordinates.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
///
/// `Copy` value semantics: the search engine recurses over owned copies
/// rather than mutating and restoring a shared grid, so no sibling branch
/// can observe another branch's placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Creates a board from an explicit grid of cells.
    pub fn from_cells(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Returns the cell at the given coordinates.
    pub fn cell(&self, mv: Move) -> Cell {
        self.cells[mv.row][mv.col]
    }

    /// Checks whether the cell at the given coordinates is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.cell(mv) == Cell::Empty
    }

    /// Returns the grid as rows of cells.
    pub fn cells(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// All empty cells in row-major order.
    ///
    /// Row-major order is a contract, not a convenience: the search engine
    /// breaks score ties by keeping the first candidate, so iteration order
    /// determines which of several equally good moves is returned.
    pub fn empty_cells(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                let mv = Move::new(row, col);
                if self.is_empty(mv) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Returns a new board with `mark` placed at `mv`.
    ///
    /// Fails with [`IllegalMove`] if the cell is already occupied. Callers
    /// draw candidates from [`Board::empty_cells`], so a failure here is an
    /// invariant violation rather than a recoverable condition.
    pub fn place(&self, mv: Move, mark: Mark) -> Result<Board, IllegalMove> {
        if !self.is_empty(mv) {
            return Err(IllegalMove {
                row: mv.row,
                col: mv.col,
            });
        }
        let mut next = *self;
        next.cells[mv.row][mv.col] = Cell::Taken(mark);
        Ok(next)
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => ".",
                    Cell::Taken(mark) => mark.as_str(),
                };
                result.push_str(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Attempted placement on an occupied cell.
#[derive(Debug, Clone, Copy, Display, Error)]
#[display("illegal move: cell ({row}, {col}) is already occupied")]
pub struct IllegalMove {
    /// Row of the occupied cell.
    pub row: usize,
    /// Column of the occupied cell.
    pub col: usize,
}
