//! Board coordinates.

use std::fmt;

/// A (rank, file) coordinate. Rank 0 is White's back rank, file 0 is the a-file.
///
/// Construction never checks bounds: offsets routinely step off the board and
/// callers ask [`Square::is_valid`] before using a square to index anything.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    rank: i8,
    file: i8,
}

impl Square {
    /// Create a square from raw rank and file, valid or not.
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Square {
        Square { rank, file }
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// Return `true` if both coordinates lie in `0..8`.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.rank >= 0 && self.rank < 8 && self.file >= 0 && self.file < 8
    }

    /// Return the square `dr` ranks and `df` files away. The result may be off the board.
    #[inline]
    pub const fn offset(self, dr: i8, df: i8) -> Square {
        Square::new(self.rank + dr, self.file + df)
    }

    /// Return `true` if `other` is one of the eight squares surrounding `self`.
    #[inline]
    pub const fn is_adjacent(self, other: Square) -> bool {
        let dr = (self.rank - other.rank).abs();
        let df = (self.file - other.file).abs();
        dr <= 1 && df <= 1 && (dr | df) != 0
    }

    /// Parse a two-character square name such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let &[file, rank] = s.as_bytes() else {
            return None;
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Square::new((rank - b'1') as i8, (file - b'a') as i8))
    }

    /// Iterate over the 64 on-board squares, a1, b1, ..., h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0i8..8).flat_map(|rank| (0i8..8).map(move |file| Square::new(rank, file)))
    }

    // Named squares
    pub const A1: Square = Square::new(0, 0);
    pub const B1: Square = Square::new(0, 1);
    pub const C1: Square = Square::new(0, 2);
    pub const D1: Square = Square::new(0, 3);
    pub const E1: Square = Square::new(0, 4);
    pub const F1: Square = Square::new(0, 5);
    pub const G1: Square = Square::new(0, 6);
    pub const H1: Square = Square::new(0, 7);
    pub const A2: Square = Square::new(1, 0);
    pub const B2: Square = Square::new(1, 1);
    pub const C2: Square = Square::new(1, 2);
    pub const D2: Square = Square::new(1, 3);
    pub const E2: Square = Square::new(1, 4);
    pub const F2: Square = Square::new(1, 5);
    pub const G2: Square = Square::new(1, 6);
    pub const H2: Square = Square::new(1, 7);
    pub const A3: Square = Square::new(2, 0);
    pub const B3: Square = Square::new(2, 1);
    pub const C3: Square = Square::new(2, 2);
    pub const D3: Square = Square::new(2, 3);
    pub const E3: Square = Square::new(2, 4);
    pub const F3: Square = Square::new(2, 5);
    pub const G3: Square = Square::new(2, 6);
    pub const H3: Square = Square::new(2, 7);
    pub const A4: Square = Square::new(3, 0);
    pub const B4: Square = Square::new(3, 1);
    pub const C4: Square = Square::new(3, 2);
    pub const D4: Square = Square::new(3, 3);
    pub const E4: Square = Square::new(3, 4);
    pub const F4: Square = Square::new(3, 5);
    pub const G4: Square = Square::new(3, 6);
    pub const H4: Square = Square::new(3, 7);
    pub const A5: Square = Square::new(4, 0);
    pub const B5: Square = Square::new(4, 1);
    pub const C5: Square = Square::new(4, 2);
    pub const D5: Square = Square::new(4, 3);
    pub const E5: Square = Square::new(4, 4);
    pub const F5: Square = Square::new(4, 5);
    pub const G5: Square = Square::new(4, 6);
    pub const H5: Square = Square::new(4, 7);
    pub const A6: Square = Square::new(5, 0);
    pub const B6: Square = Square::new(5, 1);
    pub const C6: Square = Square::new(5, 2);
    pub const D6: Square = Square::new(5, 3);
    pub const E6: Square = Square::new(5, 4);
    pub const F6: Square = Square::new(5, 5);
    pub const G6: Square = Square::new(5, 6);
    pub const H6: Square = Square::new(5, 7);
    pub const A7: Square = Square::new(6, 0);
    pub const B7: Square = Square::new(6, 1);
    pub const C7: Square = Square::new(6, 2);
    pub const D7: Square = Square::new(6, 3);
    pub const E7: Square = Square::new(6, 4);
    pub const F7: Square = Square::new(6, 5);
    pub const G7: Square = Square::new(6, 6);
    pub const H7: Square = Square::new(6, 7);
    pub const A8: Square = Square::new(7, 0);
    pub const B8: Square = Square::new(7, 1);
    pub const C8: Square = Square::new(7, 2);
    pub const D8: Square = Square::new(7, 3);
    pub const E8: Square = Square::new(7, 4);
    pub const F8: Square = Square::new(7, 5);
    pub const G8: Square = Square::new(7, 6);
    pub const H8: Square = Square::new(7, 7);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            let file = (b'a' + self.file as u8) as char;
            write!(f, "{file}{}", self.rank + 1)
        } else {
            write!(f, "({},{})", self.rank, self.file)
        }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn named_constants() {
        assert_eq!(Square::A1, Square::new(0, 0));
        assert_eq!(Square::H1, Square::new(0, 7));
        assert_eq!(Square::E4.rank(), 3);
        assert_eq!(Square::E4.file(), 4);
        assert_eq!(Square::H8, Square::new(7, 7));
    }

    #[test]
    fn validity_is_derived() {
        assert!(Square::A1.is_valid());
        assert!(Square::H8.is_valid());
        assert!(!Square::new(-1, 0).is_valid());
        assert!(!Square::new(0, 8).is_valid());
        assert!(!Square::H8.offset(1, 0).is_valid());
        assert!(Square::H8.offset(-1, -1).is_valid());
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(Square::from_algebraic("e4"), Some(Square::E4));
        assert_eq!(Square::from_algebraic("h8"), Some(Square::H8));
        assert_eq!(format!("{}", Square::E4), "e4");
        assert_eq!(format!("{:?}", Square::C6), "Square(c6)");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("a0").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert!(Square::from_algebraic("e").is_none());
        assert!(Square::from_algebraic("e44").is_none());
    }

    #[test]
    fn off_board_display_does_not_panic() {
        assert_eq!(format!("{}", Square::new(-1, 9)), "(-1,9)");
    }

    #[test]
    fn adjacency() {
        assert!(Square::E4.is_adjacent(Square::D5));
        assert!(Square::E4.is_adjacent(Square::E3));
        assert!(!Square::E4.is_adjacent(Square::E4));
        assert!(!Square::E4.is_adjacent(Square::E6));
        assert!(!Square::A1.is_adjacent(Square::H1));
    }

    #[test]
    fn all_covers_board_once() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::A1);
        assert_eq!(squares[63], Square::H8);
        assert!(squares.iter().all(|sq| sq.is_valid()));
    }
}
