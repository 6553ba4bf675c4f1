use super::competitor::Competitor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a game as reported in `status.type.name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameResult {
    #[serde(rename = "STATUS_SCHEDULED")]
    Scheduled,
    #[serde(rename = "STATUS_IN_PROGRESS")]
    InProgress,
    #[serde(rename = "STATUS_FINAL")]
    Final,
    /// Any state the exporter does not track (halftime, delayed, missing).
    /// Must stay the last variant for `serde(other)`.
    #[default]
    #[serde(other)]
    Unknown,
}

impl GameResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::Unknown => "",
            GameResult::Scheduled => "STATUS_SCHEDULED",
            GameResult::InProgress => "STATUS_IN_PROGRESS",
            GameResult::Final => "STATUS_FINAL",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StatusType {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: GameResult,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub detail: String,
    #[serde(rename = "shortDetail", default)]
    pub short_detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Status {
    /// Seconds remaining in the current period
    #[serde(default)]
    pub clock: f64,
    #[serde(rename = "displayClock", default)]
    pub display_clock: String,
    #[serde(default)]
    pub period: i32,
    #[serde(rename = "type", default)]
    pub status_type: StatusType,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Note {
    #[serde(rename = "type", default)]
    pub note_type: String,
    #[serde(default)]
    pub headline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Address {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Venue {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub indoor: bool,
}

/// The bowl-specific facts of an event.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Competition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "startDate", default)]
    pub start_date: String,
    #[serde(rename = "neutralSite", default)]
    pub neutral_site: bool,
    #[serde(default)]
    pub venue: Venue,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

impl Competition {
    /// Headline of the first note. Real payloads always carry one; an empty
    /// note list yields an empty name instead of failing.
    pub fn bowl_name(&self) -> &str {
        self.notes.first().map(|n| n.headline.as_str()).unwrap_or("")
    }

    pub fn game_status(&self) -> GameResult {
        self.status.status_type.name
    }

    pub fn is_in_progress(&self) -> bool {
        self.game_status() == GameResult::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_deserialization() {
        let cases = [
            (r#""STATUS_SCHEDULED""#, GameResult::Scheduled),
            (r#""STATUS_IN_PROGRESS""#, GameResult::InProgress),
            (r#""STATUS_FINAL""#, GameResult::Final),
            (r#""STATUS_HALFTIME""#, GameResult::Unknown),
            (r#""""#, GameResult::Unknown),
        ];

        for (json, expected) in cases {
            let parsed: GameResult = serde_json::from_str(json).unwrap();
            assert_eq!(parsed, expected, "parsing {json}");
        }
    }

    #[test]
    fn test_game_result_display() {
        assert_eq!(GameResult::InProgress.to_string(), "STATUS_IN_PROGRESS");
        assert_eq!(GameResult::Unknown.to_string(), "");
    }

    #[test]
    fn test_status_deserialization() {
        let json = r#"{
            "clock": 452.0,
            "displayClock": "7:32",
            "period": 3,
            "type": {
                "id": "2",
                "name": "STATUS_IN_PROGRESS",
                "state": "in",
                "completed": false,
                "description": "In Progress",
                "detail": "7:32 - 3rd Quarter",
                "shortDetail": "7:32 - 3rd"
            }
        }"#;

        let status: Status = serde_json::from_str(json).unwrap();
        assert_eq!(status.clock, 452.0);
        assert_eq!(status.period, 3);
        assert_eq!(status.display_clock, "7:32");
        assert_eq!(status.status_type.name, GameResult::InProgress);
        assert_eq!(status.status_type.short_detail, "7:32 - 3rd");
    }

    #[test]
    fn test_competition_bowl_name() {
        let competition = Competition {
            notes: vec![
                Note {
                    note_type: "event".to_string(),
                    headline: "Cure Bowl".to_string(),
                },
                Note {
                    note_type: "event".to_string(),
                    headline: "Second note".to_string(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(competition.bowl_name(), "Cure Bowl");
    }

    #[test]
    fn test_competition_without_notes() {
        let competition = Competition::default();
        assert_eq!(competition.bowl_name(), "");
        assert_eq!(competition.game_status(), GameResult::Unknown);
        assert!(!competition.is_in_progress());
    }

    #[test]
    fn test_venue_deserialization() {
        let json = r#"{
            "id": "3902",
            "fullName": "Brooks Stadium",
            "address": { "city": "Conway", "state": "SC" },
            "capacity": 21000,
            "indoor": false
        }"#;

        let venue: Venue = serde_json::from_str(json).unwrap();
        assert_eq!(venue.full_name, "Brooks Stadium");
        assert_eq!(venue.address.city, "Conway");
        assert_eq!(venue.capacity, 21000);
    }
}
