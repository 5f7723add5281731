pub mod alphabeta;
pub mod cache;
pub mod eval;
pub mod minimax;
pub mod result;

use pleco::Player;

use crate::board::Position;
use crate::error::EngineError;
use self::eval::Evaluate;
use self::result::SearchResult;

/// Deepest search the constructors accept. Recursion depth equals the
/// configured ply limit, so this also bounds call-stack growth.
pub const MAX_DEPTH: u32 = 64;

/// A search algorithm that evaluates the position by walking the move tree.
/// The position is borrowed for the duration of the call and restored before
/// returning.
pub trait Search {
    fn search(&mut self, pos: &mut Position) -> SearchResult;
}

fn validate_depth(depth: u32) -> Result<(), EngineError> {
    if depth > MAX_DEPTH {
        return Err(EngineError::InvalidConfiguration(format!(
            "search depth {depth} exceeds the maximum of {MAX_DEPTH}"
        )));
    }
    Ok(())
}

/// Conditions that end the recursion before expanding children. Order
/// matters: the horizon check comes first, so a mate already on the board
/// still reports as a static score at depth zero.
fn recursion_anchor<E: Evaluate>(
    evaluator: &E,
    pos: &Position,
    depth: u32,
    root: usize,
) -> Option<SearchResult> {
    if depth == 0 {
        return Some(SearchResult::Score { value: evaluator.eval(pos), line: pos.line_from(root) });
    }
    if pos.is_checkmate() {
        // The side that cannot move has been mated by the other one.
        let winner = match pos.side_to_move() {
            Player::White => Player::Black,
            Player::Black => Player::White,
        };
        return Some(SearchResult::Mate { winner, line: pos.line_from(root) });
    }
    if pos.is_stalemate() || pos.is_insufficient_material() {
        return Some(SearchResult::Draw { line: pos.line_from(root) });
    }
    None
}
