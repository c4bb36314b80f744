use crate::logic::board::Board;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod eval;
pub mod search;

/// Result of a search: the chosen placement (if any move was legal at the
/// root) and the score backed up to the root, positive favoring Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub index: Option<usize>,
    pub score: i64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u32,
}

/// Static position scoring, positive favors Black.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> i64;
}

pub trait Searcher {
    fn search(&mut self, board: &Board, depth: u8) -> SearchOutcome;
    fn stats(&self) -> SearchStats;
}
