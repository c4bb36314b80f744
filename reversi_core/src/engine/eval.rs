use crate::engine::Evaluator;
use crate::logic::board::Board;
use crate::logic::eval_constants::{terrain_weight, POINT_SCORE_FACTOR, SCORE_TARGET};

/// Deliberately weak heuristic for low difficulty levels: the signed sum
/// of all cell values.
#[derive(Debug, Clone, Copy, Default)]
pub struct EasyEvaluator;

impl Evaluator for EasyEvaluator {
    fn evaluate(&self, board: &Board) -> i64 {
        board.cells().iter().sum()
    }
}

/// Default heuristic: a point-score term that only wakes up once a side
/// has crossed the score target, plus a positional terrain term. Terrain
/// counts ownership only, never magnitude, so capture-value effects stay
/// isolated in the point-score term.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullEvaluator;

impl Evaluator for FullEvaluator {
    fn evaluate(&self, board: &Board) -> i64 {
        let score = board.score();
        let mut total = 0;
        if score.black >= SCORE_TARGET {
            total += score.black * POINT_SCORE_FACTOR;
        }
        if score.white >= SCORE_TARGET {
            total -= score.white * POINT_SCORE_FACTOR;
        }
        let size = board.size();
        for (index, cell) in board.cells().iter().enumerate() {
            total += cell.signum() * terrain_weight(size, index);
        }
        total
    }
}
