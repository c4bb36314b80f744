use crate::engine::eval::FullEvaluator;
use crate::engine::{Evaluator, SearchOutcome, SearchStats, Searcher};
use crate::logic::board::{Board, Player};

/// Default alpha/beta window bound. Far above any reachable evaluation
/// (scores end the game at the 1000 target long before the doubling
/// mechanic could approach it) and safely negatable, unlike `i64::MIN`.
pub const SCORE_INFINITY: i64 = 1_000_000_000;

/// Minimax with alpha-beta pruning over the board's transition function.
/// Black maximizes, White minimizes; pruning never changes the backed-up
/// score, only the number of nodes visited.
pub struct AlphaBetaEngine<E: Evaluator> {
    evaluator: E,
    nodes_searched: u32,
    last_depth: u8,
}

impl AlphaBetaEngine<FullEvaluator> {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_evaluator(FullEvaluator)
    }
}

impl Default for AlphaBetaEngine<FullEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator> AlphaBetaEngine<E> {
    #[must_use]
    pub const fn with_evaluator(evaluator: E) -> Self {
        Self {
            evaluator,
            nodes_searched: 0,
            last_depth: 0,
        }
    }

    /// Search below an explicit alpha/beta window. `Searcher::search` is
    /// the common entry and supplies the full `±SCORE_INFINITY` window.
    pub fn search_window(
        &mut self,
        board: &Board,
        depth: u8,
        alpha: i64,
        beta: i64,
    ) -> SearchOutcome {
        self.nodes_searched = 0;
        self.last_depth = depth;
        self.alpha_beta(board, depth, alpha, beta)
    }

    fn leaf(&mut self, board: &Board) -> SearchOutcome {
        SearchOutcome {
            index: None,
            score: self.evaluator.evaluate(board),
        }
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u8,
        alpha_in: i64,
        beta_in: i64,
    ) -> SearchOutcome {
        self.nodes_searched = self.nodes_searched.saturating_add(1);

        // A forced win by score is never searched past.
        if board.is_end_by_score() {
            return self.leaf(board);
        }

        let legal = board.list_legal_moves();
        if legal.is_empty() {
            if board.has_any_move_for(board.turn().opposite()) {
                // Pass node: burn a ply without choosing a move.
                if depth == 0 {
                    return self.leaf(board);
                }
                let passed = self.alpha_beta(&board.pass(), depth - 1, alpha_in, beta_in);
                return SearchOutcome {
                    index: None,
                    score: passed.score,
                };
            }
            // Neither side can move: terminal.
            return self.leaf(board);
        }

        if depth == 0 {
            return self.leaf(board);
        }

        let maximizing = board.turn() == Player::Black;
        let mut alpha = alpha_in;
        let mut beta = beta_in;
        let mut best_index = None;
        let mut best_score = if maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        };

        for index in legal {
            let child = board.place(index);
            let score = self.alpha_beta(&child, depth - 1, alpha, beta).score;
            // The first child always seeds the best move, so a non-null
            // index is guaranteed whenever legal moves exist.
            if best_index.is_none() {
                best_index = Some(index);
                best_score = score;
            }
            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_index = Some(index);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_index = Some(index);
                }
                beta = beta.min(best_score);
            }
            if alpha >= beta {
                break;
            }
        }

        SearchOutcome {
            index: best_index,
            score: best_score,
        }
    }
}

impl<E: Evaluator> Searcher for AlphaBetaEngine<E> {
    fn search(&mut self, board: &Board, depth: u8) -> SearchOutcome {
        let outcome = self.search_window(board, depth, -SCORE_INFINITY, SCORE_INFINITY);
        log::debug!(
            "alpha-beta depth {depth}: {} nodes, score {}",
            self.nodes_searched,
            outcome.score
        );
        outcome
    }

    fn stats(&self) -> SearchStats {
        SearchStats {
            depth: self.last_depth,
            nodes: self.nodes_searched,
        }
    }
}

/// One-ply lookahead: evaluate every immediate child statically and pick
/// the best for the side to move. No recursion, the depth argument is
/// ignored.
pub struct GreedyEngine<E: Evaluator> {
    evaluator: E,
    nodes_searched: u32,
}

impl GreedyEngine<FullEvaluator> {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_evaluator(FullEvaluator)
    }
}

impl Default for GreedyEngine<FullEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator> GreedyEngine<E> {
    #[must_use]
    pub const fn with_evaluator(evaluator: E) -> Self {
        Self {
            evaluator,
            nodes_searched: 0,
        }
    }
}

impl<E: Evaluator> Searcher for GreedyEngine<E> {
    fn search(&mut self, board: &Board, _depth: u8) -> SearchOutcome {
        self.nodes_searched = 0;
        let legal = board.list_legal_moves();
        if legal.is_empty() {
            return SearchOutcome {
                index: None,
                score: self.evaluator.evaluate(board),
            };
        }
        let maximizing = board.turn() == Player::Black;
        let mut best_index = None;
        let mut best_score = 0;
        for index in legal {
            let score = self.evaluator.evaluate(&board.place(index));
            self.nodes_searched = self.nodes_searched.saturating_add(1);
            let better = match best_index {
                None => true,
                Some(_) if maximizing => score > best_score,
                Some(_) => score < best_score,
            };
            if better {
                best_index = Some(index);
                best_score = score;
            }
        }
        SearchOutcome {
            index: best_index,
            score: best_score,
        }
    }

    fn stats(&self) -> SearchStats {
        SearchStats {
            depth: 1,
            nodes: self.nodes_searched,
        }
    }
}
