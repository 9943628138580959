//! Move application.
//!
//! `apply_move` trusts its caller: legality is the job of move generation.
//! Speculative lookahead goes through [`Board::with_move`], which works on a
//! copy and leaves `self` alone.

use tracing::{trace, warn};

use crate::board::Board;
use crate::castling::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Apply `mv` in place and return the captured piece, if any.
    ///
    /// Handles en passant captures, moves the rook on castling, promotes
    /// pawns reaching the far rank and records a new en passant square after
    /// a double step. The previous en passant square is always cleared first,
    /// so it lives for exactly one ply.
    ///
    /// A move whose source square is empty, or which leaves the board, is
    /// logged and ignored.
    pub fn apply_move(&mut self, mv: Move) -> Option<Piece> {
        let Some(piece) = self.piece_at(mv.from) else {
            warn!(%mv, "no piece on source square, move ignored");
            return None;
        };
        if !mv.to.is_valid() {
            warn!(%mv, "destination off the board, move ignored");
            return None;
        }

        let previous_ep = self.en_passant();
        self.set_en_passant(None);

        let is_pawn = piece.kind == PieceKind::Pawn;
        let is_en_passant = is_pawn
            && previous_ep == Some(mv.to)
            && mv.from.file() != mv.to.file()
            && self.is_empty(mv.to);
        let castle_side = if piece.kind == PieceKind::King {
            CastleSide::from_king_stride(mv.to.file() - mv.from.file())
        } else {
            None
        };

        self.take(mv.from);
        let mut captured = self.take(mv.to);
        self.put(mv.to, piece.moved());

        if is_en_passant {
            captured = self.take(Square::new(mv.from.rank(), mv.to.file()));
        }

        if let Some(side) = castle_side {
            let rank = mv.from.rank();
            let rook_from = Square::new(rank, side.rook_file());
            if let Some(rook) = self.take(rook_from) {
                self.put(Square::new(rank, side.rook_target_file()), rook.moved());
            }
        }

        if is_pawn && mv.to.rank() == piece.color.promotion_rank() {
            self.put(mv.to, Piece::new(piece.color, mv.promotion_kind()).moved());
        }

        if is_pawn && (mv.to.rank() - mv.from.rank()).abs() == 2 {
            let middle = (mv.from.rank() + mv.to.rank()) / 2;
            self.set_en_passant(Some(Square::new(middle, mv.from.file())));
        }

        trace!(%mv, ?captured, castle = ?castle_side, en_passant = is_en_passant, "applied move");
        captured
    }

    /// Return a copy of the board with `mv` applied. `self` is not modified.
    #[inline]
    pub fn with_move(&self, mv: Move) -> Board {
        let mut next = *self;
        next.apply_move(mv);
        next
    }

    /// Return `true` if playing `mv` would leave `side`'s king attacked.
    #[inline]
    pub fn would_be_in_check(&self, mv: Move, side: Color) -> bool {
        self.with_move(mv).is_in_check(side)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    #[test]
    fn double_step_sets_en_passant() {
        let mut b = Board::starting_position();
        assert_eq!(b.apply_move(Move::new(Square::E2, Square::E4)), None);
        assert_eq!(b.en_passant(), Some(Square::E3));
        let pawn = b.piece_at(Square::E4).unwrap();
        assert!(pawn.is(Color::White, PieceKind::Pawn));
        assert!(pawn.has_moved);
        assert!(b.is_empty(Square::E2));
    }

    #[test]
    fn en_passant_lives_one_ply() {
        let mut b = Board::starting_position();
        b.apply_move(Move::new(Square::E2, Square::E4));
        b.apply_move(Move::new(Square::G8, Square::F6));
        assert_eq!(b.en_passant(), None);
    }

    #[test]
    fn en_passant_capture_removes_passed_pawn() {
        let mut b = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let captured = b.apply_move(Move::new(Square::E5, Square::D6));
        assert_eq!(captured.map(|p| p.kind), Some(PieceKind::Pawn));
        assert!(b.is_empty(Square::D5));
        assert!(b.piece_at(Square::D6).unwrap().is(Color::White, PieceKind::Pawn));
        assert_eq!(b.en_passant(), None);
    }

    #[test]
    fn ordinary_capture_returns_victim() {
        let mut b = board("4k3/8/8/3n4/4P3/8/8/4K3 w - - 0 1");
        let captured = b.apply_move(Move::new(Square::E4, Square::D5));
        assert_eq!(captured, Some(Piece::new(Color::Black, PieceKind::Knight)));
        assert_eq!(b.pieces_of(Color::Black).count(), 1);
    }

    #[test]
    fn kingside_castle_moves_rook() {
        let mut b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        b.apply_move(Move::new(Square::E1, Square::G1));
        let king = b.piece_at(Square::G1).unwrap();
        let rook = b.piece_at(Square::F1).unwrap();
        assert!(king.is(Color::White, PieceKind::King) && king.has_moved);
        assert!(rook.is(Color::White, PieceKind::Rook) && rook.has_moved);
        assert!(b.is_empty(Square::H1));
        assert!(b.is_empty(Square::E1));
    }

    #[test]
    fn queenside_castle_moves_rook() {
        let mut b = board("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        b.apply_move(Move::new(Square::E8, Square::C8));
        assert!(b.piece_at(Square::C8).unwrap().is(Color::Black, PieceKind::King));
        assert!(b.piece_at(Square::D8).unwrap().is(Color::Black, PieceKind::Rook));
        assert!(b.is_empty(Square::A8));
    }

    #[test]
    fn promotion_uses_requested_kind() {
        let mut b = board("k7/4P3/8/8/8/8/8/4K3 w - - 0 1");
        b.apply_move(Move::with_promotion(Square::E7, Square::E8, PieceKind::Knight));
        assert!(b.piece_at(Square::E8).unwrap().is(Color::White, PieceKind::Knight));
    }

    #[test]
    fn promotion_defaults_to_queen() {
        let mut b = board("4k3/8/8/8/8/8/p7/4K3 b - - 0 1");
        b.apply_move(Move::new(Square::A2, Square::A1));
        assert!(b.piece_at(Square::A1).unwrap().is(Color::Black, PieceKind::Queen));
    }

    #[test]
    fn empty_source_is_ignored() {
        let mut b = Board::starting_position();
        assert_eq!(b.apply_move(Move::new(Square::E4, Square::E5)), None);
        assert_eq!(b, Board::starting_position());
    }

    #[test]
    fn with_move_leaves_original_untouched() {
        let b = Board::starting_position();
        let next = b.with_move(Move::new(Square::G1, Square::F3));
        assert_eq!(b, Board::starting_position());
        assert!(next.piece_at(Square::F3).is_some());
        assert!(next.is_empty(Square::G1));
    }

    #[test]
    fn would_be_in_check_detects_exposed_king() {
        let b = board("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1");
        assert!(b.would_be_in_check(Move::new(Square::E2, Square::D3), Color::White));
        assert!(!b.would_be_in_check(Move::new(Square::E1, Square::D1), Color::White));
    }
}
