//! Board model and search engine.

pub mod rules;
pub mod search;
pub mod types;

pub use rules::{BoardStatus, evaluate};
pub use search::{DEFAULT_SEARCH_DEPTH, SearchResult, best_move};
pub use types::{Board, Cell, IllegalMove, Mark, Move};
