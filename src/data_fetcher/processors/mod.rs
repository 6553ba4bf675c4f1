pub mod time_formatting;

pub use time_formatting::{format_bowl_date, normalize_kickoff, parse_kickoff};
