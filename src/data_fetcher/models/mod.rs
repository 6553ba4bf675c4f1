pub mod competition;
pub mod competitor;
pub mod scoreboard;
pub mod snapshot;

pub use competition::{Address, Competition, GameResult, Note, Status, StatusType, Venue};
pub use competitor::{Competitor, HomeAway, Record, Team};
pub use scoreboard::{Event, ScoreboardResponse, Season, Weather, Week};
pub use snapshot::Snapshot;
