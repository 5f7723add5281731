use pleco::Player;

use crate::board::Position;
use crate::error::EngineError;
use crate::search::cache::PositionCache;
use crate::search::eval::Evaluate;
use crate::search::result::SearchResult;
use crate::search::{recursion_anchor, validate_depth, Search};

/// Alpha-beta searcher. Prunes subtrees neither side would steer into; the
/// root result is identical to full minimax. Optionally memoizes exact
/// position values in an LRU cache keyed by the four-field FEN prefix.
pub struct AlphaBetaSearcher<E> {
    evaluator: E,
    depth: u32,
    cache: Option<PositionCache>,
}

impl<E: Evaluate> AlphaBetaSearcher<E> {
    pub fn new(evaluator: E, depth: u32) -> Result<Self, EngineError> {
        validate_depth(depth)?;
        Ok(Self { evaluator, depth, cache: None })
    }

    /// Cache-backed variant. A capacity of zero disables caching, which
    /// behaves exactly like `new`.
    pub fn with_cache(evaluator: E, depth: u32, capacity: usize) -> Result<Self, EngineError> {
        validate_depth(depth)?;
        let cache = (capacity > 0).then(|| PositionCache::new(capacity));
        Ok(Self { evaluator, depth, cache })
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Cache diagnostics, when caching is enabled.
    pub fn cache(&self) -> Option<&PositionCache> {
        self.cache.as_ref()
    }

    pub fn cache_mut(&mut self) -> Option<&mut PositionCache> {
        self.cache.as_mut()
    }

    fn alpha_beta(
        &mut self,
        pos: &mut Position,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        root: usize,
    ) -> SearchResult {
        if let Some(result) = recursion_anchor(&self.evaluator, pos, depth, root) {
            return result;
        }
        let maximize = pos.side_to_move() == Player::White;
        let mut best: Option<SearchResult> = None;
        let moves = pos.legal_moves();
        for mv in moves.iter() {
            pos.make(*mv);
            let child = self.child_result(pos, depth - 1, alpha, beta, root);
            pos.unmake();
            let improved = match &best {
                None => true,
                Some(current) => {
                    if maximize {
                        child > *current
                    } else {
                        child < *current
                    }
                }
            };
            if improved {
                best = Some(child);
            }
            if let Some(current) = &best {
                if maximize {
                    alpha = alpha.max(current.effective_score());
                    if alpha >= beta {
                        break;
                    }
                } else {
                    beta = beta.min(current.effective_score());
                    if beta <= alpha {
                        break;
                    }
                }
            }
        }
        best.expect("no legal moves in a position that is neither mate nor drawn")
    }

    /// One child expansion: consult the cache at the depth the child will be
    /// searched, otherwise recurse and remember exact values.
    fn child_result(
        &mut self,
        pos: &mut Position,
        depth: u32,
        alpha: f64,
        beta: f64,
        root: usize,
    ) -> SearchResult {
        if let Some(cache) = self.cache.as_mut() {
            if let Some(value) = cache.lookup(pos, depth) {
                return SearchResult::Score { value, line: pos.line_from(root) };
            }
        }
        let result = self.alpha_beta(pos, depth, alpha, beta, root);
        if let Some(cache) = self.cache.as_mut() {
            if let SearchResult::Score { value, .. } = &result {
                // A score produced by a cutoff is only a bound on the real
                // value. Leaf evaluations are exact regardless of the window;
                // interior scores only when they landed strictly inside it.
                // Mate and draw results are never cached: the projection
                // would lose the distance and the line.
                if depth == 0 || (alpha < *value && *value < beta) {
                    cache.insert(pos, depth, *value);
                }
            }
        }
        result
    }
}

impl<E: Evaluate> Search for AlphaBetaSearcher<E> {
    fn search(&mut self, pos: &mut Position) -> SearchResult {
        let root = pos.history_len();
        self.alpha_beta(pos, self.depth, f64::NEG_INFINITY, f64::INFINITY, root)
    }
}
