pub mod http_handler;
mod opponent;

pub use opponent::{AdaptiveOpponent, DEFAULT_EXPLOIT_RATE, HISTORY_LEN, MoveHistory};
