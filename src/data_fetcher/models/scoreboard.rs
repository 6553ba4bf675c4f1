use super::competition::{Competition, GameResult, Venue};
use crate::data_fetcher::processors::{format_bowl_date, parse_kickoff};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level scoreboard payload. Only the bowl-relevant parts are modelled.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoreboardResponse {
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Season {
    #[serde(default)]
    pub year: i32,
    #[serde(rename = "type", default)]
    pub season_type: i32,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Week {
    #[serde(default)]
    pub number: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Weather {
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(default)]
    pub temperature: Option<i32>,
    #[serde(rename = "highTemperature", default)]
    pub high_temperature: Option<i32>,
}

/// One scheduled game.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Event {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub uid: String,
    /// Kickoff as sent upstream, e.g. "2022-12-17T16:00Z". Parsed on demand.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "shortName", default)]
    pub short_name: String,
    #[serde(default)]
    pub season: Season,
    #[serde(default)]
    pub week: Week,
    #[serde(default)]
    pub competitions: Vec<Competition>,
    #[serde(default)]
    pub weather: Option<Weather>,
}

impl Event {
    /// The competition the exporter reports on. Bowl events carry exactly one.
    pub fn competition(&self) -> Option<&Competition> {
        self.competitions.first()
    }

    /// Parsed kickoff time in UTC.
    pub fn kickoff(&self) -> Result<DateTime<Utc>, AppError> {
        parse_kickoff(&self.date)
    }

    /// Kickoff day in the `date` label format, e.g. "Sat, 17 Dec 2022".
    pub fn bowl_date(&self) -> Result<String, AppError> {
        self.kickoff().map(format_bowl_date)
    }

    /// Marketing name of the bowl, or an empty string when unavailable.
    pub fn bowl_name(&self) -> &str {
        self.competition().map(Competition::bowl_name).unwrap_or("")
    }

    pub fn venue(&self) -> Option<&Venue> {
        self.competition().map(|c| &c.venue)
    }

    pub fn venue_name(&self) -> &str {
        self.venue().map(|v| v.full_name.as_str()).unwrap_or("")
    }

    pub fn game_status(&self) -> GameResult {
        self.competition()
            .map(Competition::game_status)
            .unwrap_or_default()
    }
}
