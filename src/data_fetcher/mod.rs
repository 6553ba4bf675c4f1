pub mod api;
pub mod models;
pub mod processors;

pub use api::{HttpScoreboardSource, ScoreboardSource, parse_scoreboard};
pub use models::{Event, GameResult, Snapshot};
