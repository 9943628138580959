//! Client side of the UCI protocol, used to let an external engine play one side.

pub mod client;
pub mod error;
pub mod protocol;

pub use client::{EngineClient, EngineConfig, read_best_move};
pub use error::UciError;
pub use protocol::{Request, Response, parse_response, search_requests};
