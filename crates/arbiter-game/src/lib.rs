//! Game controller: turn order, move validation against the legal-move set,
//! square-pair notation and game results.

pub mod error;
pub mod game;
pub mod notation;

pub use error::{GameError, NotationError};
pub use game::{Game, GameStatus, MoveOutcome};
pub use notation::{format_move, parse_move};
