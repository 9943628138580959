//! The slice of the UCI text protocol needed to ask an engine for one move.

use std::fmt;

/// A line sent to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request<'a> {
    /// `uci` -- switch the engine to UCI mode.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- forget previous positions.
    UciNewGame,
    /// `position fen <fen>`.
    PositionFen(&'a str),
    /// `go depth <n>`.
    GoDepth(u8),
    /// `quit`.
    Quit,
}

impl fmt::Display for Request<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Uci => f.write_str("uci"),
            Request::IsReady => f.write_str("isready"),
            Request::UciNewGame => f.write_str("ucinewgame"),
            Request::PositionFen(fen) => write!(f, "position fen {fen}"),
            Request::GoDepth(depth) => write!(f, "go depth {depth}"),
            Request::Quit => f.write_str("quit"),
        }
    }
}

/// The full request for a single search, one command per line.
pub fn search_requests(fen: &str, depth: u8) -> String {
    let requests = [
        Request::Uci,
        Request::IsReady,
        Request::UciNewGame,
        Request::PositionFen(fen),
        Request::GoDepth(depth),
    ];
    requests.iter().map(|r| format!("{r}\n")).collect()
}

/// A parsed line of engine output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// `uciok`.
    UciOk,
    /// `readyok`.
    ReadyOk,
    /// `id name ...` / `id author ...`, with the rest of the line.
    Id(String),
    /// `info ...`, with the rest of the line.
    Info(String),
    /// `bestmove <move> [ponder <move>]`. `best` is `None` for `(none)`.
    BestMove {
        best: Option<String>,
        ponder: Option<String>,
    },
    /// Anything else, ignored by the client.
    Unknown(String),
}

/// Parse a single line of engine output.
pub fn parse_response(line: &str) -> Response {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = tokens.split_first() else {
        return Response::Unknown(String::new());
    };

    match head {
        "uciok" => Response::UciOk,
        "readyok" => Response::ReadyOk,
        "id" => Response::Id(rest.join(" ")),
        "info" => Response::Info(rest.join(" ")),
        "bestmove" => parse_bestmove(rest),
        _ => Response::Unknown(line.trim().to_string()),
    }
}

fn parse_bestmove(tokens: &[&str]) -> Response {
    let best = match tokens.first() {
        None | Some(&"(none)") => None,
        Some(mv) => Some(mv.to_string()),
    };
    let ponder = match tokens.get(1..3) {
        Some(&["ponder", mv]) => Some(mv.to_string()),
        _ => None,
    };
    Response::BestMove { best, ponder }
}

#[cfg(test)]
mod tests {
    use super::{Request, Response, parse_response, search_requests};

    #[test]
    fn request_lines() {
        assert_eq!(Request::Uci.to_string(), "uci");
        assert_eq!(Request::GoDepth(12).to_string(), "go depth 12");
        assert_eq!(
            Request::PositionFen("8/8/8/8/8/8/8/K6k w - - 0 1").to_string(),
            "position fen 8/8/8/8/8/8/8/K6k w - - 0 1"
        );
    }

    #[test]
    fn search_request_order() {
        let text = search_requests("4k3/8/8/8/8/8/8/4K3 w - - 0 1", 20);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "uci",
                "isready",
                "ucinewgame",
                "position fen 4k3/8/8/8/8/8/8/4K3 w - - 0 1",
                "go depth 20",
            ]
        );
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn handshake_responses() {
        assert_eq!(parse_response("uciok"), Response::UciOk);
        assert_eq!(parse_response("readyok\r"), Response::ReadyOk);
        assert_eq!(
            parse_response("id name Stockfish 16"),
            Response::Id("name Stockfish 16".to_string())
        );
        assert_eq!(parse_response(""), Response::Unknown(String::new()));
    }

    #[test]
    fn info_lines() {
        assert_eq!(
            parse_response("info depth 3 score cp 21 pv e2e4"),
            Response::Info("depth 3 score cp 21 pv e2e4".to_string())
        );
    }

    #[test]
    fn bestmove_variants() {
        assert_eq!(
            parse_response("bestmove e2e4"),
            Response::BestMove {
                best: Some("e2e4".to_string()),
                ponder: None
            }
        );
        assert_eq!(
            parse_response("bestmove a7a8q ponder h7h6"),
            Response::BestMove {
                best: Some("a7a8q".to_string()),
                ponder: Some("h7h6".to_string())
            }
        );
        assert_eq!(
            parse_response("bestmove (none)"),
            Response::BestMove {
                best: None,
                ponder: None
            }
        );
    }
}
