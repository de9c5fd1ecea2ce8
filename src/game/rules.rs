//! Win and draw evaluation for the board.

use super::types::{Board, Cell, Mark, Move};

/// Outcome of evaluating a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStatus {
    /// No line is complete and at least one cell is empty.
    Ongoing,
    /// The given mark owns a complete line.
    Won(Mark),
    /// No line is complete and the board is full.
    Draw,
}

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Evaluates a board position.
///
/// A line is won when all three of its cells carry the same mark. A won line
/// decides the status regardless of the rest of the board.
pub fn evaluate(board: &Board) -> BoardStatus {
    for line in LINES {
        let [a, b, c] = line.map(|(row, col)| board.cell(Move::new(row, col)));
        if let Cell::Taken(mark) = a
            && a == b
            && b == c
        {
            return BoardStatus::Won(mark);
        }
    }

    if board.empty_cells().is_empty() {
        BoardStatus::Draw
    } else {
        BoardStatus::Ongoing
    }
}
