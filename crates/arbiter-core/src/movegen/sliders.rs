//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

use super::MoveList;

pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(super) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Generate pseudo-legal moves along each ray in `directions`.
///
/// A ray stops at the first occupied square; the square itself is included
/// only when it holds an enemy piece.
pub(super) fn gen_slider(
    board: &Board,
    from: Square,
    us: Color,
    directions: &[(i8, i8)],
    list: &mut MoveList,
) {
    for &(dr, df) in directions {
        let mut to = from.offset(dr, df);
        while board.is_on_board(to) {
            match board.color_at(to) {
                None => list.push(Move::new(from, to)),
                Some(color) => {
                    if color != us {
                        list.push(Move::new(from, to));
                    }
                    break;
                }
            }
            to = to.offset(dr, df);
        }
    }
}
