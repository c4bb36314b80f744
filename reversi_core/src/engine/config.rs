use crate::engine::eval::EasyEvaluator;
use crate::engine::search::{AlphaBetaEngine, GreedyEngine};
use crate::engine::{SearchOutcome, Searcher};
use crate::logic::board::{Board, Player};
use serde::{Deserialize, Serialize};

/// Highest supported difficulty level.
pub const MAX_LEVEL: u8 = 6;

// Levels at or below this play with the weak evaluator on purpose.
const EASY_EVAL_MAX_LEVEL: u8 = 3;
// Stronger levels trade nominal level for search depth.
const STRONG_DEPTH_DISCOUNT: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvaluatorKind {
    Easy,
    Full,
}

/// Search policy resolved from a difficulty level. Depth and evaluator
/// stay independent parameters of the searchers themselves; this struct
/// is presentation-layer tuning, not an engine contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub depth: u8,
    pub evaluator: EvaluatorKind,
    pub greedy: bool,
}

/// Per-match settings supplied by the embedding application: which side
/// the human plays and the computer's difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub human_side: Player,
    pub level: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            human_side: Player::Black,
            level: 0,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn new(human_side: Player, level: u8) -> Self {
        Self {
            human_side,
            level: level.min(MAX_LEVEL),
        }
    }

    /// Out-of-range levels in hand-edited input clamp to the maximum
    /// rather than erroring.
    pub fn load_from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(Self {
            level: config.level.min(MAX_LEVEL),
            ..config
        })
    }

    #[must_use]
    pub const fn cpu_side(&self) -> Player {
        self.human_side.opposite()
    }

    /// Difficulty policy: levels 0-3 use the weak evaluator (level 0 skips
    /// search entirely and plays greedily), stronger levels search with
    /// the full evaluator at a discounted depth.
    #[must_use]
    pub fn search_params(&self) -> SearchParams {
        let level = self.level.min(MAX_LEVEL);
        let easy = level <= EASY_EVAL_MAX_LEVEL;
        SearchParams {
            depth: if easy { level } else { level - STRONG_DEPTH_DISCOUNT },
            evaluator: if easy {
                EvaluatorKind::Easy
            } else {
                EvaluatorKind::Full
            },
            greedy: level == 0,
        }
    }
}

/// Run the search the resolved params ask for and return its outcome.
#[must_use]
pub fn choose_move(board: &Board, params: &SearchParams) -> SearchOutcome {
    match (params.greedy, params.evaluator) {
        (true, EvaluatorKind::Easy) => {
            GreedyEngine::with_evaluator(EasyEvaluator).search(board, 0)
        }
        (true, EvaluatorKind::Full) => GreedyEngine::new().search(board, 0),
        (false, EvaluatorKind::Easy) => {
            AlphaBetaEngine::with_evaluator(EasyEvaluator).search(board, params.depth)
        }
        (false, EvaluatorKind::Full) => AlphaBetaEngine::new().search(board, params.depth),
    }
}
