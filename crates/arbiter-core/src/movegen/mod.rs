//! Pseudo-legal move generation per piece kind, and the legal-move filter on top of it.

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::warn;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS, gen_slider};

const LIST_CAPACITY: usize = 256;

/// Stack-allocated buffer for generated moves. Capacity 256 covers the theoretical max of 218.
pub struct MoveList {
    moves: [Move; LIST_CAPACITY],
    len: u16,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::new(Square::A1, Square::A1); LIST_CAPACITY],
            len: 0,
        }
    }

    /// Push a move onto the list. Once the list is full further moves are dropped.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        let Some(slot) = self.moves.get_mut(self.len as usize) else {
            warn!(%mv, "move list full, dropping move");
            return;
        };
        *slot = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Iterate over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Return `true` if some move in the list lands on `sq`.
    #[inline]
    pub fn reaches(&self, sq: Square) -> bool {
        self.iter().any(|mv| mv.to == sq)
    }

    /// Return `true` if the list holds exactly `mv`.
    #[inline]
    pub fn contains(&self, mv: Move) -> bool {
        self.iter().any(|&m| m == mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Append the pseudo-legal moves of the piece on `from` to `list`.
///
/// Pseudo-legal moves follow the movement rules and occupancy but may leave the
/// mover's own king attacked. An empty or off-board `from` yields nothing.
pub fn pseudo_legal_moves(board: &Board, from: Square, list: &mut MoveList) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    match piece.kind {
        PieceKind::Pawn => gen_pawn(board, from, piece.color, list),
        PieceKind::Knight => gen_knight(board, from, piece.color, list),
        PieceKind::Bishop => gen_slider(board, from, piece.color, &BISHOP_DIRECTIONS, list),
        PieceKind::Rook => gen_slider(board, from, piece.color, &ROOK_DIRECTIONS, list),
        PieceKind::Queen => gen_slider(board, from, piece.color, &QUEEN_DIRECTIONS, list),
        PieceKind::King => gen_king(board, from, piece, list),
    }
}

/// Generate every legal move for `color`.
///
/// Each pseudo-legal candidate is tried on a copy of the board and dropped if
/// it leaves `color`'s king attacked. Nothing is cached between calls.
pub fn generate_legal_moves(board: &Board, color: Color) -> MoveList {
    let mut legal = MoveList::new();
    for (from, _) in board.pieces_of(color) {
        let mut candidates = MoveList::new();
        pseudo_legal_moves(board, from, &mut candidates);
        for &mv in &candidates {
            if !board.would_be_in_check(mv, color) {
                legal.push(mv);
            }
        }
    }
    legal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::piece::Piece;

    fn pseudo(board: &Board, from: Square) -> MoveList {
        let mut list = MoveList::new();
        pseudo_legal_moves(board, from, &mut list);
        list
    }

    #[test]
    fn starting_position_20_moves() {
        let board = Board::starting_position();
        for color in Color::ALL {
            let moves = generate_legal_moves(&board, color);
            assert_eq!(moves.len(), 20, "{color:?} should have 20 legal moves");
        }
    }

    #[test]
    fn empty_square_generates_nothing() {
        let board = Board::starting_position();
        assert!(pseudo(&board, Square::E4).is_empty());
        assert!(pseudo(&board, Square::new(9, 9)).is_empty());
    }

    #[test]
    fn pinned_knight_zero_moves() {
        // King on e1, knight on e2, rook on e8: the knight is pinned along the e-file.
        let board: Board = "4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(pseudo(&board, Square::E2).len(), 6);
        let moves = generate_legal_moves(&board, Color::White);
        assert!(moves.iter().all(|mv| mv.from != Square::E2));
    }

    #[test]
    fn double_check_king_only() {
        // Black knight f3 and rook e8 both check the king on e1.
        let board: Board = "4r1k1/8/8/8/8/5n2/3B4/4K3 w - - 0 1".parse().unwrap();
        let moves = generate_legal_moves(&board, Color::White);
        assert!(!moves.is_empty());
        for mv in &moves {
            assert_eq!(mv.from, Square::E1, "only the king may move, got {mv}");
        }
    }

    #[test]
    fn check_must_be_answered() {
        // Rook e8 checks the king on e1; the bishop's only answer is the block on e3.
        let board: Board = "4r1k1/8/8/8/8/8/3B4/4K3 w - - 0 1".parse().unwrap();
        let moves = generate_legal_moves(&board, Color::White);
        let bishop_moves: Vec<_> = moves.iter().filter(|mv| mv.from == Square::D2).collect();
        assert_eq!(bishop_moves.len(), 1);
        assert_eq!(bishop_moves[0].to, Square::E3);
    }

    #[test]
    fn legal_moves_leave_king_safe() {
        let board: Board = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
            .parse()
            .unwrap();
        for color in Color::ALL {
            for &mv in &generate_legal_moves(&board, color) {
                assert!(!board.with_move(mv).is_in_check(color), "{mv} exposes the king");
            }
        }
    }

    #[test]
    fn move_list_basics() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        let mv = Move::new(Square::E2, Square::E4);
        list.push(mv);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], mv);
        assert!(list.contains(mv));
        assert!(list.reaches(Square::E4));
        assert!(!list.reaches(Square::E3));
    }

    #[test]
    fn full_list_drops_extra_moves() {
        let mut list = MoveList::new();
        let mv = Move::new(Square::A1, Square::A2);
        for _ in 0..LIST_CAPACITY + 44 {
            list.push(mv);
        }
        assert_eq!(list.len(), LIST_CAPACITY);
        assert_eq!(list.iter().count(), LIST_CAPACITY);
    }

    #[test]
    fn generation_does_not_touch_board() {
        let mut board = Board::starting_position();
        board.put(Square::E5, Piece::new(Color::Black, PieceKind::Queen));
        let before = board;
        let _ = generate_legal_moves(&board, Color::White);
        let _ = generate_legal_moves(&board, Color::Black);
        assert_eq!(board, before);
    }
}
