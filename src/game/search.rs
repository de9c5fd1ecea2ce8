//! Depth-bounded minimax search with alpha-beta pruning.

use super::rules::{BoardStatus, evaluate};
use super::types::{Board, Mark, Move};
use tracing::instrument;

/// Default search depth in plies.
///
/// The full 3x3 game tree is at most 9 plies deep, so any limit >= 9 plays
/// optimally (never loses). Lower limits trade strength for speed; the limit
/// is configurable through `AgentConfig::search_depth`.
pub const DEFAULT_SEARCH_DEPTH: u32 = 5;

/// Result of a search: the position's score and the move that achieves it.
///
/// `best` is `None` when the position is terminal or the depth limit was hit
/// before any candidate was examined; callers must not act on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Score under the fixed sign convention: positive favors X.
    pub score: i32,
    /// The move achieving the score, if any candidate was explored.
    pub best: Option<Move>,
}

/// Finds the best move for `to_move` on `board`.
///
/// `maximizing` states whether `to_move` is the maximizing side under the
/// sign convention (X wins score +1, O wins score -1, draw 0); the caller
/// passes `to_move == Mark::X`. Candidates are explored depth-first in
/// row-major order and ties keep the first-found move, so the result is
/// deterministic for a fixed board, side, and depth.
#[instrument(skip(board))]
pub fn best_move(board: &Board, to_move: Mark, maximizing: bool, depth: u32) -> SearchResult {
    minimax(board, to_move, maximizing, depth, i32::MIN, i32::MAX)
}

fn minimax(
    board: &Board,
    to_move: Mark,
    maximizing: bool,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
) -> SearchResult {
    let status = evaluate(board);
    if status != BoardStatus::Ongoing || depth == 0 {
        return SearchResult {
            score: static_score(status),
            best: None,
        };
    }

    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best = None;

    for mv in board.empty_cells() {
        let child = board
            .place(mv, to_move)
            .expect("candidate drawn from empty_cells");
        let result = minimax(&child, to_move.opponent(), !maximizing, depth - 1, alpha, beta);

        // Strict comparison: on ties the earlier (row-major) move stands.
        if maximizing {
            if result.score > best_score {
                best_score = result.score;
                best = Some(mv);
            }
            alpha = alpha.max(best_score);
        } else {
            if result.score < best_score {
                best_score = result.score;
                best = Some(mv);
            }
            beta = beta.min(best_score);
        }

        if beta <= alpha {
            break;
        }
    }

    SearchResult {
        score: best_score,
        best,
    }
}

fn static_score(status: BoardStatus) -> i32 {
    match status {
        BoardStatus::Won(Mark::X) => 1,
        BoardStatus::Won(Mark::O) => -1,
        BoardStatus::Draw | BoardStatus::Ongoing => 0,
    }
}
