use pleco::{BitMove, Board, MoveList, Piece, PieceType, Player, SQ};

use crate::error::EngineError;

/// Reversible board: a `pleco::Board` plus an explicit stack of the moves
/// applied since construction. Search code walks the tree with paired
/// `make`/`unmake` and slices the stack into the lines it reports.
#[derive(Debug)]
pub struct Position {
    board: Board,
    stack: Vec<BitMove>,
}

impl Position {
    pub fn startpos() -> Self {
        Self { board: Board::start_pos(), stack: Vec::with_capacity(128) }
    }

    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        Board::from_fen(fen)
            .map(|b| Self { board: b, stack: Vec::with_capacity(128) })
            .map_err(|e| EngineError::InvalidFen(format!("{e:?}")))
    }

    pub fn legal_moves(&self) -> MoveList {
        self.board.generate_moves()
    }

    pub fn make(&mut self, mv: BitMove) {
        self.board.apply_move(mv);
        self.stack.push(mv);
    }

    /// Panics when no move has been made; every `unmake` must pair with an
    /// earlier `make`.
    pub fn unmake(&mut self) {
        assert!(self.stack.pop().is_some(), "unmake with no move on the stack");
        self.board.undo_move();
    }

    pub fn side_to_move(&self) -> Player {
        self.board.turn()
    }

    pub fn is_checkmate(&self) -> bool {
        self.board.checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.board.stalemate()
    }

    /// Dead position: bare kings, a lone minor piece, or bishops that all
    /// stand on squares of one color.
    pub fn is_insufficient_material(&self) -> bool {
        for side in [Player::White, Player::Black] {
            for pt in [PieceType::P, PieceType::R, PieceType::Q] {
                if self.board.count_piece(side, pt) > 0 {
                    return false;
                }
            }
        }
        let knights = self.board.count_piece(Player::White, PieceType::N)
            + self.board.count_piece(Player::Black, PieceType::N);
        let bishops = self.board.count_piece(Player::White, PieceType::B)
            + self.board.count_piece(Player::Black, PieceType::B);
        if knights + bishops <= 1 {
            return true;
        }
        knights == 0 && self.bishops_on_one_color()
    }

    fn bishops_on_one_color(&self) -> bool {
        let mut dark = false;
        let mut light = false;
        for idx in 0..64u8 {
            let piece = self.board.piece_at_sq(SQ(idx));
            if piece == Piece::WhiteBishop || piece == Piece::BlackBishop {
                if (idx / 8 + idx % 8) % 2 == 0 {
                    dark = true;
                } else {
                    light = true;
                }
            }
        }
        !(dark && light)
    }

    pub fn fen(&self) -> String {
        self.board.fen()
    }

    /// Key for the evaluation cache: piece placement, side to move, castling
    /// rights and en-passant target. The move clocks are dropped; they almost
    /// never change what a position is worth.
    pub fn cache_key(&self) -> String {
        let fen = self.board.fen();
        fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
    }

    pub fn history_len(&self) -> usize {
        self.stack.len()
    }

    /// Moves made since `start`, oldest first.
    pub fn line_from(&self, start: usize) -> Vec<BitMove> {
        self.stack[start..].to_vec()
    }

    pub fn inner(&self) -> &Board {
        &self.board
    }
}
