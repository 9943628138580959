//! Core chess rules: board representation, move generation, move application,
//! attack detection, and game-end classification.

mod attacks;
mod board;
mod castling;
mod chess_move;
mod color;
mod error;
mod fen;
mod make_move;
pub mod movegen;
pub mod perft;
mod piece;
mod piece_kind;
mod square;
mod status;

pub use board::{Board, PrettyBoard};
pub use castling::CastleSide;
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::{STARTING_FEN, parse_fen};
pub use movegen::{MoveList, generate_legal_moves, pseudo_legal_moves};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
pub use status::BoardStatus;
