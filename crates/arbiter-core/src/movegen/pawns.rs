//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveList;

/// Generate pseudo-legal pawn moves: pushes, double pushes, captures and en passant.
pub(super) fn gen_pawn(board: &Board, from: Square, us: Color, list: &mut MoveList) {
    let forward = us.forward();

    // --- Pushes ---
    let one = from.offset(forward, 0);
    if board.is_empty(one) {
        push_or_promote(from, one, us, list);

        let two = from.offset(2 * forward, 0);
        if from.rank() == us.pawn_rank() && board.is_empty(two) {
            list.push(Move::new(from, two));
        }
    }

    // --- Captures ---
    for df in [-1, 1] {
        let target = from.offset(forward, df);
        match board.piece_at(target) {
            Some(victim) if victim.color != us => push_or_promote(from, target, us, list),
            Some(_) => {}
            None => {
                // The en passant square is empty; the victim sits beside us.
                let passed = board.piece_at(Square::new(from.rank(), target.file()));
                let victim_is_enemy_pawn =
                    passed.is_some_and(|p| p.is(us.flip(), PieceKind::Pawn));
                if board.is_en_passant_target(target) && victim_is_enemy_pawn {
                    list.push(Move::new(from, target));
                }
            }
        }
    }
}

/// Push `from -> to`, expanded into one move per promotion kind on the far rank.
fn push_or_promote(from: Square, to: Square, us: Color, list: &mut MoveList) {
    if to.rank() == us.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            list.push(Move::with_promotion(from, to, kind));
        }
    } else {
        list.push(Move::new(from, to));
    }
}
