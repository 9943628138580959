//! Blocking client that asks an external UCI engine for a single move.

use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use arbiter_core::{Board, Color};
use tracing::{debug, trace, warn};

use crate::error::UciError;
use crate::protocol::{Request, Response, parse_response, search_requests};

/// Which engine to run, how deep it searches and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Executable to spawn, looked up on `PATH` if not absolute.
    pub path: PathBuf,
    /// Depth passed to `go depth`.
    pub depth: u8,
    /// How long to wait for `bestmove` before killing the engine.
    pub timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("stockfish"),
            depth: 20,
            timeout: Duration::from_secs(60),
        }
    }
}

/// Spawns a fresh engine process for every request.
#[derive(Debug, Clone, Default)]
pub struct EngineClient {
    config: EngineConfig,
}

impl EngineClient {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ask the engine for its best move for `side` on `board`.
    ///
    /// # Errors
    ///
    /// See [`EngineClient::best_move`].
    pub fn best_move_for(&self, board: &Board, side: Color) -> Result<String, UciError> {
        self.best_move(&board.to_fen(side))
    }

    /// Start the engine, send the search request for `fen` and return the
    /// move token from its `bestmove` line, e.g. `e2e4` or `a7a8q`.
    ///
    /// # Errors
    ///
    /// [`UciError::Spawn`] if the executable cannot be started,
    /// [`UciError::Io`] on pipe failures, [`UciError::EngineClosed`] if the
    /// engine exits without answering, [`UciError::Timeout`] if it stays
    /// silent past the configured limit and [`UciError::NoBestMove`] if it
    /// has nothing to play.
    pub fn best_move(&self, fen: &str) -> Result<String, UciError> {
        let path = self.config.path.display().to_string();
        debug!(engine = %path, fen, depth = self.config.depth, "requesting best move");

        let mut child = Command::new(&self.config.path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| UciError::Spawn { path, source })?;

        let mut stdin = child.stdin.take().ok_or(UciError::EngineClosed)?;
        let stdout = child.stdout.take().ok_or(UciError::EngineClosed)?;

        let (answer_tx, answer_rx) = mpsc::channel();
        let reader = thread::spawn(move || {
            // The receiver is dropped after a timeout.
            let _ = answer_tx.send(read_best_move(BufReader::new(stdout)));
        });

        let sent = stdin
            .write_all(search_requests(fen, self.config.depth).as_bytes())
            .and_then(|()| stdin.flush());
        let result = match sent {
            Err(err) => Err(UciError::from(err)),
            Ok(()) => match answer_rx.recv_timeout(self.config.timeout) {
                Ok(answer) => answer,
                Err(RecvTimeoutError::Disconnected) => Err(UciError::EngineClosed),
                Err(RecvTimeoutError::Timeout) => {
                    if let Err(err) = child.kill() {
                        warn!(%err, "failed to kill silent engine");
                    }
                    Err(UciError::Timeout {
                        limit: self.config.timeout,
                    })
                }
            },
        };

        if let Err(err) = writeln!(stdin, "{}", Request::Quit) {
            trace!(%err, "engine stdin already closed");
        }
        drop(stdin);
        if let Err(err) = child.wait() {
            warn!(%err, "failed to reap engine process");
        }
        if reader.join().is_err() {
            warn!("engine output reader panicked");
        }

        match &result {
            Ok(mv) => debug!(%mv, "engine answered"),
            Err(err) => warn!(%err, "engine request failed"),
        }
        result
    }
}

/// Read engine output until a `bestmove` line and return its move token.
///
/// # Errors
///
/// [`UciError::NoBestMove`] for `bestmove (none)`, [`UciError::EngineClosed`]
/// if the output ends first, and [`UciError::Io`] on read failures.
pub fn read_best_move<R: BufRead>(reader: R) -> Result<String, UciError> {
    for line in reader.lines() {
        let line = line?;
        match parse_response(&line) {
            Response::BestMove {
                best: Some(mv),
                ponder,
            } => {
                trace!(%mv, ?ponder, "bestmove");
                return Ok(mv);
            }
            Response::BestMove { best: None, .. } => return Err(UciError::NoBestMove),
            other => trace!(?other, "engine output"),
        }
    }
    Err(UciError::EngineClosed)
}
