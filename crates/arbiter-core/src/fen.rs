//! Position strings: parsing into a [`Board`] and the simplified export.
//!
//! Export writes only placement and side to move, with fixed `- - 0 1`
//! trailing fields. Parsing accepts two to six fields; the castling field
//! (`-` when absent) decides which kings and rooks count as unmoved, and the
//! move counters are ignored.

use std::str::FromStr;

use crate::board::Board;
use crate::castling::CastleSide;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Position string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Piece placement field, rank 8 first, runs of empty squares as digits.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(71);
        for rank in (0i8..8).rev() {
            let mut empty = 0u8;
            for file in 0i8..8 {
                match self.piece_at(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push(char::from(b'0' + empty));
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }

    /// Position string with `side` to move, e.g.
    /// `rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1`.
    ///
    /// Castling rights, the en passant square and the move counters are not
    /// exported.
    pub fn to_fen(&self, side: Color) -> String {
        format!("{} {side} - - 0 1", self.placement())
    }
}

/// Parse a position string into a board and the side to move.
///
/// # Errors
///
/// Returns [`FenError`] for malformed fields, a board that fails
/// [`Board::validate`], or a position where the side not to move is in check.
pub fn parse_fen(fen: &str) -> Result<(Board, Color), FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if !(2..=6).contains(&fields.len()) {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        });
    }

    let mut board = parse_placement(fields[0])?;

    let side = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidColor {
                found: other.to_string(),
            });
        }
    };

    apply_castling_field(&mut board, fields.get(2).copied().unwrap_or("-"))?;

    if let Some(&ep) = fields.get(3) {
        if ep != "-" {
            let sq = Square::from_algebraic(ep)
                .filter(|sq| sq.rank() == 2 || sq.rank() == 5)
                .ok_or_else(|| FenError::InvalidEnPassant {
                    found: ep.to_string(),
                })?;
            board.set_en_passant(Some(sq));
        }
    }

    board.validate()?;
    if board.is_in_check(side.flip()) {
        return Err(FenError::OpponentInCheck { side: side.flip() });
    }
    Ok((board, side))
}

fn parse_placement(field: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_index as i8;
        let mut file: usize = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file += digit as usize;
                continue;
            }

            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            if file >= 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file + 1,
                });
            }
            board.put(Square::new(rank, file as i8), piece);
            file += 1;
        }

        if file != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file,
            });
        }
    }
    Ok(board)
}

/// Mark kings and rooks as moved unless the castling field keeps them eligible.
fn apply_castling_field(board: &mut Board, field: &str) -> Result<(), FenError> {
    let mut rights: Vec<(Color, CastleSide)> = Vec::with_capacity(4);
    if field != "-" {
        for c in field.chars() {
            let right = match c {
                'K' => (Color::White, CastleSide::KingSide),
                'Q' => (Color::White, CastleSide::QueenSide),
                'k' => (Color::Black, CastleSide::KingSide),
                'q' => (Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            rights.push(right);
        }
    }

    let moved: Vec<(Square, Piece)> = board
        .pieces()
        .filter(|&(sq, piece)| match piece.kind {
            PieceKind::King => {
                let home = Square::new(piece.color.back_rank(), 4);
                sq != home || !rights.iter().any(|&(color, _)| color == piece.color)
            }
            PieceKind::Rook => !CastleSide::ALL.into_iter().any(|side| {
                sq == Square::new(piece.color.back_rank(), side.rook_file())
                    && rights.contains(&(piece.color, side))
            }),
            _ => false,
        })
        .collect();

    for (sq, piece) in moved {
        board.put(sq, piece.moved());
    }
    Ok(())
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        parse_fen(fen).map(|(board, _)| board)
    }
}
