//! Controller errors. Every variant is recoverable: the caller reports it and asks again.

use arbiter_core::{Color, Move, Square};

/// Errors from parsing square-pair notation such as `e2e4` or `e7-e8n`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// Fewer than four characters remained after cleanup.
    #[error("move too short: \"{input}\" (use a form like e2e4 or e2-e4)")]
    TooShort {
        /// The cleaned-up input.
        input: String,
    },
    /// A square name is outside `a1`..`h8`.
    #[error("invalid square: \"{square}\"")]
    InvalidSquare {
        /// The offending two-character square name.
        square: String,
    },
}

/// Reasons the controller refuses a move request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The request text could not be read as a move.
    #[error(transparent)]
    Notation(#[from] NotationError),

    /// The source square is empty.
    #[error("no piece at {square}")]
    NoPieceAt {
        /// The empty source square.
        square: Square,
    },

    /// The source square holds a piece of the side not on move.
    #[error("that's not your piece: {square} belongs to {}", .owner.name())]
    NotYourPiece {
        /// The source square.
        square: Square,
        /// Side the piece belongs to.
        owner: Color,
    },

    /// The move is not in the current legal-move set.
    #[error("illegal move: {mv}")]
    IllegalMove {
        /// The rejected request.
        mv: Move,
    },

    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
}
