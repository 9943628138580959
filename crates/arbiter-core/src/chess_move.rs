//! Move requests.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A move request: source, destination and an optional promotion choice.
///
/// A move is an intent only. Whether it captures, castles, promotes or gives
/// check is decided by the board it is applied to.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Requested promotion kind. `None` promotes to a queen if the move promotes at all.
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Create a move without a promotion choice.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a move with an explicit promotion choice.
    #[inline]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Move {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// The kind a promoting pawn becomes: the requested kind, or a queen.
    #[inline]
    pub fn promotion_kind(self) -> PieceKind {
        self.promotion.unwrap_or(PieceKind::Queen)
    }

    /// Return `true` if `request` asks for this move.
    ///
    /// Squares must match. A promotion candidate additionally requires the
    /// request's promotion kind (queen when unspecified) to match.
    pub fn satisfies(self, request: Move) -> bool {
        if self.from != request.from || self.to != request.to {
            return false;
        }
        match self.promotion {
            Some(kind) => kind == request.promotion_kind(),
            None => true,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
