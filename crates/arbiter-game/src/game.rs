//! Turn sequencing and the validated-move pathway.

use std::fmt;

use arbiter_core::{Board, BoardStatus, Color, FenError, Move, MoveList, Piece, parse_fen};
use tracing::{debug, info, warn};

use crate::error::GameError;
use crate::notation::parse_move;

/// How the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Moves are still being accepted.
    Ongoing,
    /// The side to move was checkmated.
    Checkmate {
        /// The side that delivered mate.
        winner: Color,
    },
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// A player quit.
    Abandoned,
    /// The move-suggestion engine failed.
    EngineError,
}

impl GameStatus {
    /// Return `true` once no further moves will be accepted.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "Game in progress"),
            GameStatus::Checkmate { winner } => write!(f, "{} wins by checkmate!", winner.name()),
            GameStatus::Stalemate => write!(f, "Draw by stalemate!"),
            GameStatus::Abandoned => write!(f, "Game terminated by user"),
            GameStatus::EngineError => write!(f, "Game ended due to engine error."),
        }
    }
}

/// What happened when a move was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The legal move actually played, with its promotion kind resolved.
    pub mv: Move,
    /// Side that made the move.
    pub mover: Color,
    /// Piece removed from the board, including en passant victims.
    pub captured: Option<Piece>,
    /// The opponent is now in check.
    pub gives_check: bool,
    /// Game status after the move.
    pub status: GameStatus,
}

/// A game in progress: the board, whose turn it is, and how it stands.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Start a game from the standard initial position, White to move.
    pub fn new() -> Game {
        Game::with_position(Board::starting_position(), Color::White)
    }

    /// Start a game from a position string.
    ///
    /// # Errors
    ///
    /// Returns the [`FenError`] of a malformed string.
    pub fn from_fen(fen: &str) -> Result<Game, FenError> {
        let (board, side) = parse_fen(fen)?;
        Ok(Game::with_position(board, side))
    }

    /// Start a game from an arbitrary board. The position may already be terminal.
    pub fn with_position(board: Board, side_to_move: Color) -> Game {
        let mut game = Game {
            board,
            side_to_move,
            status: GameStatus::Ongoing,
            history: Vec::new(),
        };
        game.status = game.evaluate();
        game
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Moves accepted so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Return `true` if the side to move is in check.
    pub fn in_check(&self) -> bool {
        self.board.is_in_check(self.side_to_move)
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves(self.side_to_move)
    }

    /// Current position with the side to move, e.g. for an external engine.
    pub fn position_string(&self) -> String {
        self.board.to_fen(self.side_to_move)
    }

    /// Parse `input` as square-pair notation and play it.
    ///
    /// # Errors
    ///
    /// See [`Game::play`]; malformed notation yields [`GameError::Notation`].
    pub fn play_notation(&mut self, input: &str) -> Result<MoveOutcome, GameError> {
        let request = parse_move(input)?;
        self.play(request)
    }

    /// Validate `request` against the legal moves of the side to move and play it.
    ///
    /// A request without a promotion kind matches the queen promotion. On
    /// success the turn passes to the opponent and the game status is
    /// re-evaluated for them.
    ///
    /// # Errors
    ///
    /// Rejections leave the game untouched: [`GameError::GameOver`],
    /// [`GameError::NoPieceAt`], [`GameError::NotYourPiece`] or
    /// [`GameError::IllegalMove`].
    pub fn play(&mut self, request: Move) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let Some(piece) = self.board.piece_at(request.from) else {
            debug!(%request, "rejected: empty source square");
            return Err(GameError::NoPieceAt {
                square: request.from,
            });
        };
        if piece.color != self.side_to_move {
            debug!(%request, "rejected: opponent's piece");
            return Err(GameError::NotYourPiece {
                square: request.from,
                owner: piece.color,
            });
        }

        let legal = self.legal_moves();
        let Some(&mv) = legal.iter().find(|candidate| candidate.satisfies(request)) else {
            debug!(%request, legal = legal.len(), "rejected: not a legal move");
            return Err(GameError::IllegalMove { mv: request });
        };

        let mover = self.side_to_move;
        let captured = self.board.apply_move(mv);
        self.history.push(mv);
        self.side_to_move = mover.flip();

        let gives_check = self.in_check();
        self.status = self.evaluate();
        info!(%mv, side = mover.name(), check = gives_check, status = %self.status, "move played");

        Ok(MoveOutcome {
            mv,
            mover,
            captured,
            gives_check,
            status: self.status,
        })
    }

    /// End the game at a player's request. A finished game keeps its result.
    pub fn abandon(&mut self) {
        if !self.is_over() {
            self.status = GameStatus::Abandoned;
        }
    }

    /// End the game because the move-suggestion engine failed.
    pub fn record_engine_failure(&mut self) {
        if !self.is_over() {
            warn!("ending game after engine failure");
            self.status = GameStatus::EngineError;
        }
    }

    fn evaluate(&self) -> GameStatus {
        match self.board.status(self.side_to_move) {
            BoardStatus::Checkmate => GameStatus::Checkmate {
                winner: self.side_to_move.flip(),
            },
            BoardStatus::Stalemate => GameStatus::Stalemate,
            BoardStatus::Ongoing | BoardStatus::Check => GameStatus::Ongoing,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl std::str::FromStr for Game {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Game, FenError> {
        Game::from_fen(fen)
    }
}
