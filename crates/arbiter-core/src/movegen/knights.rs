//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

use super::MoveList;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Generate pseudo-legal knight moves.
pub(super) fn gen_knight(board: &Board, from: Square, us: Color, list: &mut MoveList) {
    for (dr, df) in KNIGHT_OFFSETS {
        let to = from.offset(dr, df);
        if board.is_on_board(to) && board.color_at(to) != Some(us) {
            list.push(Move::new(from, to));
        }
    }
}
