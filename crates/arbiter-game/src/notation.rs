//! Square-pair move notation: `e2e4`, `e2-e4`, `E7 E8`, `a7a8n`.

use arbiter_core::{Move, PieceKind, Square};
use tracing::trace;

use crate::error::NotationError;

/// Parse a move request.
///
/// One `-` separator and all spaces are removed and the text is lowercased.
/// The first four characters name the source and destination squares; an
/// optional fifth picks the promotion kind, where anything other than
/// `q`, `r`, `b` or `n` means a queen. Further characters are ignored.
///
/// # Errors
///
/// [`NotationError::TooShort`] if fewer than four characters remain,
/// [`NotationError::InvalidSquare`] if either square is off the board.
pub fn parse_move(input: &str) -> Result<Move, NotationError> {
    let cleaned = clean(input);
    trace!(input, %cleaned, "parsing move");

    let chars: Vec<char> = cleaned.chars().collect();
    if chars.len() < 4 {
        return Err(NotationError::TooShort { input: cleaned });
    }

    let from = square(&chars[0..2])?;
    let to = square(&chars[2..4])?;
    let promotion = chars.get(4).map(|&c| promotion_kind(c));

    Ok(Move {
        from,
        to,
        promotion,
    })
}

/// Render a move the way [`parse_move`] reads it, e.g. `e7e8q`.
pub fn format_move(mv: Move) -> String {
    mv.to_string()
}

fn clean(input: &str) -> String {
    let without_dash = match input.find('-') {
        Some(pos) => {
            let mut s = input.to_string();
            s.remove(pos);
            s
        }
        None => input.to_string(),
    };
    without_dash
        .chars()
        .filter(|&c| c != ' ')
        .collect::<String>()
        .to_lowercase()
}

fn square(chars: &[char]) -> Result<Square, NotationError> {
    let name: String = chars.iter().collect();
    Square::from_algebraic(&name).ok_or(NotationError::InvalidSquare { square: name })
}

fn promotion_kind(c: char) -> PieceKind {
    match PieceKind::from_fen_char(c) {
        Some(kind) if kind.is_promotion_choice() => kind,
        _ => PieceKind::Queen,
    }
}
