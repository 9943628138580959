//! Check, checkmate and stalemate.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::movegen::{MoveList, generate_legal_moves};

/// Rules status of a position from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardStatus {
    /// Not in check and at least one legal move.
    Ongoing,
    /// In check with at least one legal move.
    Check,
    /// In check with no legal move.
    Checkmate,
    /// Not in check with no legal move.
    Stalemate,
}

impl BoardStatus {
    /// Return `true` for checkmate and stalemate.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, BoardStatus::Checkmate | BoardStatus::Stalemate)
    }
}

impl fmt::Display for BoardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoardStatus::Ongoing => "ongoing",
            BoardStatus::Check => "check",
            BoardStatus::Checkmate => "checkmate",
            BoardStatus::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

impl Board {
    /// Every legal move for `side`.
    #[inline]
    pub fn legal_moves(&self, side: Color) -> MoveList {
        generate_legal_moves(self, side)
    }

    /// Return `true` if `side` has at least one legal move.
    pub fn has_legal_move(&self, side: Color) -> bool {
        !self.legal_moves(side).is_empty()
    }

    /// `side` is in check and cannot get out of it.
    pub fn is_checkmate(&self, side: Color) -> bool {
        self.is_in_check(side) && !self.has_legal_move(side)
    }

    /// `side` is not in check but has nothing legal to play.
    pub fn is_stalemate(&self, side: Color) -> bool {
        !self.is_in_check(side) && !self.has_legal_move(side)
    }

    /// Classify the position for `side` with a single move generation.
    pub fn status(&self, side: Color) -> BoardStatus {
        match (self.is_in_check(side), self.has_legal_move(side)) {
            (true, true) => BoardStatus::Check,
            (true, false) => BoardStatus::Checkmate,
            (false, true) => BoardStatus::Ongoing,
            (false, false) => BoardStatus::Stalemate,
        }
    }
}
