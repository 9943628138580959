//! The board: an 8x8 grid of optional pieces plus the en passant square.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank layout from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete rules state of a position.
///
/// The board is a flat `Copy` value: cloning it for a speculative move is a
/// plain memory copy and the copy shares nothing with the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Cells indexed `[rank][file]`.
    cells: [[Option<Piece>; 8]; 8],
    /// Square a pawn may capture onto en passant on the next move only.
    en_passant: Option<Square>,
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [[None; 8]; 8],
            en_passant: None,
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                board.put(Square::new(color.back_rank(), file as i8), Piece::new(color, kind));
            }
            for file in 0..8 {
                board.put(
                    Square::new(color.pawn_rank(), file),
                    Piece::new(color, PieceKind::Pawn),
                );
            }
        }
        board
    }

    /// Return the piece on `sq`, or `None` for empty and off-board squares.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !sq.is_valid() {
            return None;
        }
        self.cells[sq.rank() as usize][sq.file() as usize]
    }

    /// Return `true` if `sq` is on the board and unoccupied.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        sq.is_valid() && self.cells[sq.rank() as usize][sq.file() as usize].is_none()
    }

    /// Return `true` if `sq` is on the board.
    #[inline]
    pub fn is_on_board(&self, sq: Square) -> bool {
        sq.is_valid()
    }

    /// Return the color of the piece on `sq`, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    /// Place `piece` on `sq`, replacing any occupant. Off-board squares are ignored.
    pub fn put(&mut self, sq: Square, piece: Piece) {
        if sq.is_valid() {
            self.cells[sq.rank() as usize][sq.file() as usize] = Some(piece);
        }
    }

    /// Remove and return the piece on `sq`.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        if !sq.is_valid() {
            return None;
        }
        self.cells[sq.rank() as usize][sq.file() as usize].take()
    }

    /// Return the en passant target square, if the last move was a pawn double step.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return `true` if `sq` is the current en passant target.
    #[inline]
    pub fn is_en_passant_target(&self, sq: Square) -> bool {
        self.en_passant == Some(sq)
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    /// Iterate over every occupied square and its piece, a1 to h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the pieces of one side.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Locate the king of `color`. `None` only on a malformed board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Check the structural preconditions the rules rely on.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if count != 1 {
                let color = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        let pawn_on_back_rank = self.pieces().any(|(sq, piece)| {
            piece.kind == PieceKind::Pawn && (sq.rank() == 0 || sq.rank() == 7)
        });
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\"", self.placement())?;
        if let Some(ep) = self.en_passant {
            write!(f, ", ep={ep}")?;
        }
        write!(f, ")")
    }
}

/// Wrapper for drawing a board as a framed ASCII grid, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SEPARATOR: &str = "  +---+---+---+---+---+---+---+---+";
        writeln!(f, "{SEPARATOR}")?;
        for rank in (0i8..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0i8..8 {
                match self.0.piece_at(Square::new(rank, file)) {
                    Some(piece) => write!(f, " {piece} |")?,
                    None => write!(f, "   |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "{SEPARATOR}")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
