//! Engine client errors.

use std::time::Duration;

/// Errors talking to an external UCI engine.
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    /// The engine executable could not be started.
    #[error("failed to start engine \"{path}\": {source}")]
    Spawn {
        /// The executable that was tried.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to the engine failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The engine closed its output before answering.
    #[error("engine closed its output before sending bestmove")]
    EngineClosed,

    /// The engine did not send `bestmove` in time and was killed.
    #[error("engine gave no answer within {} ms", .limit.as_millis())]
    Timeout {
        /// The configured limit.
        limit: Duration,
    },

    /// The engine answered `bestmove (none)`.
    #[error("engine found no move to play")]
    NoBestMove,
}
