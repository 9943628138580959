//! King move and castling generation.

use crate::board::Board;
use crate::castling::CastleSide;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

use super::MoveList;

const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Generate pseudo-legal king steps plus any castling the king is eligible for.
pub(super) fn gen_king(board: &Board, from: Square, king: Piece, list: &mut MoveList) {
    for (dr, df) in KING_OFFSETS {
        let to = from.offset(dr, df);
        if board.is_on_board(to) && board.color_at(to) != Some(king.color) {
            list.push(Move::new(from, to));
        }
    }

    if king.has_moved {
        return;
    }
    for side in CastleSide::ALL {
        if board.can_castle(king.color, side) {
            list.push(Move::new(from, from.offset(0, 2 * side.direction())));
        }
    }
}
