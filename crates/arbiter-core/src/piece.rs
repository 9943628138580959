//! A piece standing on the board.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored piece plus the "has moved at least once" flag used for castling.
///
/// Pieces carry no identity; two pieces with equal fields are interchangeable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
}

impl Piece {
    /// Create a piece that has not moved yet.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece {
            color,
            kind,
            has_moved: false,
        }
    }

    /// Return a copy of this piece with the moved flag set.
    #[inline]
    pub const fn moved(self) -> Piece {
        Piece {
            has_moved: true,
            ..self
        }
    }

    /// Parse a position-string letter: uppercase is White, lowercase is Black.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind))
    }

    /// Position-string letter for this piece.
    #[inline]
    pub fn fen_char(self) -> char {
        let c = self.kind.fen_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let marker = if self.has_moved { "*" } else { "" };
        write!(f, "{color}{}{marker}", self.kind.fen_char().to_ascii_uppercase())
    }
}
