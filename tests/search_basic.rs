use pretty_assertions::assert_eq;
use wrenbot::board::Position;
use wrenbot::search::alphabeta::AlphaBetaSearcher;
use wrenbot::search::eval::{Evaluate, MaterialEvaluator, PstEvaluator};
use wrenbot::search::minimax::MinimaxSearcher;
use wrenbot::search::result::SearchResult;
use wrenbot::search::{Search, MAX_DEPTH};

const STARTING: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const LONDON: &str = "r1bqk2r/p1p2p1p/2n1pn2/1pbp2p1/3P1B2/2PBPN2/PP1N1PPP/R2Q1RK1 b kq - 1 8";
const IMBALANCED: &str = "r3kbnr/pp3ppp/2n5/8/4PP2/2q5/PPPB2PP/3bKBNR w Kkq - 0 10";

fn fens() -> Vec<Position> {
    [STARTING, LONDON, IMBALANCED]
        .iter()
        .map(|f| Position::from_fen(f).expect("valid fen"))
        .collect()
}

#[test]
fn depth_zero_returns_the_evaluator_score() {
    for mut pos in fens() {
        let expected = PstEvaluator.eval(&pos);
        let minimax = MinimaxSearcher::new(PstEvaluator, 0).unwrap().search(&mut pos);
        let alphabeta = AlphaBetaSearcher::new(PstEvaluator, 0).unwrap().search(&mut pos);

        for result in [minimax, alphabeta] {
            match result {
                SearchResult::Score { value, line } => {
                    assert_eq!(value, expected);
                    assert!(line.is_empty());
                }
                other => panic!("expected a score at depth 0, got {other:?}"),
            }
        }
    }
}

#[test]
fn depth_zero_with_material_evaluator() {
    let mut pos = Position::startpos();
    let result = AlphaBetaSearcher::new(MaterialEvaluator, 0).unwrap().search(&mut pos);
    assert_eq!(result.effective_score(), 0.0);
}

#[test]
fn search_restores_the_position() {
    let mut pos = Position::from_fen(LONDON).expect("valid fen");
    let before = pos.fen();
    let mut searcher = AlphaBetaSearcher::with_cache(PstEvaluator, 2, 10_000).unwrap();
    searcher.search(&mut pos);

    assert_eq!(before, pos.fen());
    assert_eq!(pos.history_len(), 0);
}

#[test]
fn search_is_idempotent() {
    let mut pos = Position::from_fen(LONDON).expect("valid fen");
    let mut searcher = AlphaBetaSearcher::new(PstEvaluator, 2).unwrap();
    let first = searcher.search(&mut pos);
    let second = searcher.search(&mut pos);

    assert_eq!(first, second);
    assert_eq!(first.best_move(), second.best_move());
}

#[test]
fn best_move_is_legal() {
    for depth in 1..=3 {
        let mut pos = Position::startpos();
        let result = AlphaBetaSearcher::new(PstEvaluator, depth).unwrap().search(&mut pos);
        let best = result.best_move().expect("startpos search yields a move");
        assert!(pos.legal_moves().iter().any(|m| *m == best), "illegal best move at depth {depth}");
    }
}

#[test]
fn line_is_playable_from_the_root() {
    let mut pos = Position::startpos();
    let result = AlphaBetaSearcher::new(PstEvaluator, 3).unwrap().search(&mut pos);
    let line = result.line().to_vec();
    assert!(!line.is_empty() && line.len() <= 3);

    for mv in &line {
        assert!(pos.legal_moves().iter().any(|m| m == mv), "line move {mv} not legal");
        pos.make(*mv);
    }
    for _ in &line {
        pos.unmake();
    }
}

#[test]
fn winning_queen_capture_is_preferred() {
    // Qe2xd2 wins the black queen outright.
    let mut pos = Position::from_fen("k7/8/8/8/8/8/3qQ3/7K w - - 0 1").expect("valid fen");
    for depth in [1, 2] {
        let result = AlphaBetaSearcher::new(MaterialEvaluator, depth).unwrap().search(&mut pos);
        let best = result.best_move().expect("a move exists");
        assert_eq!(format!("{}", best), "e2d2", "depth {depth}");
    }
}

#[test]
fn excessive_depth_is_rejected() {
    assert!(MinimaxSearcher::new(PstEvaluator, MAX_DEPTH + 1).is_err());
    assert!(AlphaBetaSearcher::new(PstEvaluator, MAX_DEPTH + 1).is_err());
    assert!(AlphaBetaSearcher::with_cache(PstEvaluator, MAX_DEPTH + 1, 16).is_err());
    assert!(AlphaBetaSearcher::new(PstEvaluator, MAX_DEPTH).is_ok());
}
