//! Attack detection.
//!
//! Pawns attack diagonally forward whether or not anything stands there, and
//! kings attack their eight neighbours. Every other piece attacks exactly the
//! squares its pseudo-legal moves reach.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::{MoveList, pseudo_legal_moves};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Return `true` if any piece of `by` attacks `target`.
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        if !target.is_valid() {
            return false;
        }
        self.pieces_of(by)
            .any(|(from, piece)| self.attacks_from(from, piece, target))
    }

    /// Return `true` if `by` attacks a square the king must cross while castling.
    ///
    /// Pawns count by their diagonal pattern, so a pawn guarding an empty
    /// transit square blocks castling. [`Board::is_square_attacked`] already
    /// counts pawns by that pattern and kings by adjacency, so the capture and
    /// transit questions have the same answer and this delegates to it.
    pub fn is_castling_transit_attacked(&self, transit: Square, by: Color) -> bool {
        self.is_square_attacked(transit, by)
    }

    /// Return `true` if `side`'s king is attacked. A board without that king is never in check.
    pub fn is_in_check(&self, side: Color) -> bool {
        match self.king_square(side) {
            Some(king) => self.is_square_attacked(king, side.flip()),
            None => false,
        }
    }

    fn attacks_from(&self, from: Square, piece: Piece, target: Square) -> bool {
        match piece.kind {
            PieceKind::Pawn => {
                let forward = piece.color.forward();
                target == from.offset(forward, -1) || target == from.offset(forward, 1)
            }
            PieceKind::King => from.is_adjacent(target),
            _ => {
                let mut reach = MoveList::new();
                pseudo_legal_moves(self, from, &mut reach);
                reach.reaches(target)
            }
        }
    }
}
