pub mod fetch_utils;
pub mod http_client;
pub mod parser;
pub mod source;

// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export fetching and decoding
pub use fetch_utils::fetch_bytes;
pub use parser::{parse_scoreboard, parse_scoreboard_at};
pub use source::{HttpScoreboardSource, ScoreboardSource};
