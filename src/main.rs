use anyhow::Result;
use clap::Parser;
use pleco::Player;
use wrenbot::board::Position;
use wrenbot::search::alphabeta::AlphaBetaSearcher;
use wrenbot::search::eval::PstEvaluator;
use wrenbot::search::minimax::MinimaxSearcher;
use wrenbot::search::result::SearchResult;
use wrenbot::search::Search;

#[derive(Parser, Debug)]
#[command(author, version, about = "Search a chess position for the best move", long_about = None)]
struct Args {
    /// Position to search, as a FEN string (defaults to the starting position)
    #[arg(long)]
    fen: Option<String>,

    /// Moves in UCI notation applied after the FEN, e.g. "e2e4 e7e5"
    #[arg(long, value_delimiter = ' ')]
    moves: Vec<String>,

    /// Search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Search algorithm: "minimax" or "alphabeta"
    #[arg(long, default_value = "alphabeta")]
    algo: String,

    /// Evaluation cache capacity in entries; 0 disables caching
    #[arg(long, default_value_t = 100_000)]
    cache_entries: usize,
}

fn apply_moves(pos: &mut Position, moves: &[String]) -> Result<()> {
    for uci in moves {
        let found = pos.legal_moves().iter().copied().find(|m| format!("{}", m) == *uci);
        match found {
            Some(m) => pos.make(m),
            None => anyhow::bail!("illegal move: {uci}"),
        }
    }
    Ok(())
}

fn describe(result: &SearchResult) -> String {
    match result {
        SearchResult::Score { value, .. } => format!("cp {value:.0}"),
        SearchResult::Mate { winner, line } => {
            let side = match winner {
                Player::White => "white",
                Player::Black => "black",
            };
            format!("mate for {side} in {} plies", line.len())
        }
        SearchResult::Draw { .. } => "draw".to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut pos = match &args.fen {
        Some(fen) => Position::from_fen(fen)?,
        None => Position::startpos(),
    };
    apply_moves(&mut pos, &args.moves)?;

    log::info!("searching {} at depth {}", pos.fen(), args.depth);
    let result = match args.algo.as_str() {
        "minimax" => MinimaxSearcher::new(PstEvaluator, args.depth)?.search(&mut pos),
        "alphabeta" => {
            let mut searcher = AlphaBetaSearcher::with_cache(PstEvaluator, args.depth, args.cache_entries)?;
            let result = searcher.search(&mut pos);
            if let Some(cache) = searcher.cache() {
                log::debug!(
                    "cache: {} hits, {} misses, {} entries",
                    cache.hits(),
                    cache.misses(),
                    cache.len()
                );
            }
            result
        }
        other => anyhow::bail!("unknown algorithm: {other} (expected \"minimax\" or \"alphabeta\")"),
    };

    println!("eval {}", describe(&result));
    match result.best_move() {
        Some(mv) => println!("bestmove {}", mv),
        None => println!("bestmove (none)"),
    }
    Ok(())
}
