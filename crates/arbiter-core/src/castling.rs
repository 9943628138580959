//! Castling eligibility.

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both wings, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File step the king takes toward this wing's rook.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// File of this wing's corner rook.
    #[inline]
    pub const fn rook_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File the rook lands on after castling.
    #[inline]
    pub const fn rook_target_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Wing a king move of `df` files heads toward, if it is a castling stride.
    #[inline]
    pub const fn from_king_stride(df: i8) -> Option<CastleSide> {
        match df {
            2 => Some(CastleSide::KingSide),
            -2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

impl Board {
    /// Return `true` if `color` may castle toward `side` right now.
    ///
    /// Requires an unmoved king that is not in check, an unmoved rook of the
    /// same color in the wing's corner, empty squares strictly between them,
    /// and no attack on the two squares the king crosses.
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        let Some(king_sq) = self.king_square(color) else {
            return false;
        };
        let Some(king) = self.piece_at(king_sq) else {
            return false;
        };
        if king.has_moved || self.is_in_check(color) {
            return false;
        }

        let rook_sq = Square::new(king_sq.rank(), side.rook_file());
        match self.piece_at(rook_sq) {
            Some(rook) if rook.is(color, PieceKind::Rook) && !rook.has_moved => {}
            _ => return false,
        }

        let (low, high) = if king_sq.file() < rook_sq.file() {
            (king_sq.file(), rook_sq.file())
        } else {
            (rook_sq.file(), king_sq.file())
        };
        if !((low + 1)..high).all(|file| self.is_empty(Square::new(king_sq.rank(), file))) {
            return false;
        }

        let them = color.flip();
        (1..=2).all(|step| {
            let transit = king_sq.offset(0, step * side.direction());
            transit.is_valid() && !self.is_castling_transit_attacked(transit, them)
        })
    }
}
