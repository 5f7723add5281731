use pleco::Player;

use crate::board::Position;
use crate::error::EngineError;
use crate::search::eval::Evaluate;
use crate::search::result::SearchResult;
use crate::search::{recursion_anchor, validate_depth, Search};

/// Full-width searcher: visits every node down to the depth bound, no
/// pruning. Mostly useful as the reference the alpha-beta searcher is
/// checked against.
pub struct MinimaxSearcher<E> {
    evaluator: E,
    depth: u32,
}

impl<E: Evaluate> MinimaxSearcher<E> {
    pub fn new(evaluator: E, depth: u32) -> Result<Self, EngineError> {
        validate_depth(depth)?;
        Ok(Self { evaluator, depth })
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    fn minimax(&self, pos: &mut Position, depth: u32, root: usize) -> SearchResult {
        if let Some(result) = recursion_anchor(&self.evaluator, pos, depth, root) {
            return result;
        }
        let maximize = pos.side_to_move() == Player::White;
        let mut best: Option<SearchResult> = None;
        let moves = pos.legal_moves();
        for mv in moves.iter() {
            pos.make(*mv);
            let child = self.minimax(pos, depth - 1, root);
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
        }
        best.expect("no legal moves in a position that is neither mate nor drawn")
    }
}

impl<E: Evaluate> Search for MinimaxSearcher<E> {
    fn search(&mut self, pos: &mut Position) -> SearchResult {
        let root = pos.history_len();
        self.minimax(pos, self.depth, root)
    }
}
