use serde::{Deserialize, Serialize};

/// Which side of the field a competitor is listed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HomeAway {
    Home,
    Away,
    #[default]
    #[serde(other)]
    Unknown,
}

impl HomeAway {
    /// Label value, matching the upstream spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeAway::Home => "home",
            HomeAway::Away => "away",
            HomeAway::Unknown => "",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Team {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(rename = "shortDisplayName", default)]
    pub short_display_name: String,
    #[serde(default)]
    pub color: String,
    #[serde(rename = "alternateColor", default)]
    pub alternate_color: String,
    /// Logo URL
    #[serde(default)]
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Record {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(rename = "type", default)]
    pub record_type: String,
    /// Win-loss summary, e.g. "9-4"
    #[serde(default)]
    pub summary: String,
}

/// One team's participation in a competition.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Competitor {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub uid: String,
    #[serde(rename = "type", default)]
    pub competitor_type: String,
    #[serde(rename = "homeAway", default)]
    pub home_away: HomeAway,
    #[serde(default)]
    pub team: Team,
    /// Current score as a numeric string
    #[serde(default)]
    pub score: String,
    #[serde(default)]
    pub records: Vec<Record>,
    /// Absent or null until the game is decided
    #[serde(default)]
    pub winner: Option<bool>,
}

impl Competitor {
    /// Score as a number, or `None` when the upstream string is not numeric.
    pub fn numeric_score(&self) -> Option<i64> {
        self.score.trim().parse().ok()
    }

    /// Summary of the record named `key`, if present.
    pub fn record_summary(&self, key: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|record| record.name == key)
            .map(|record| record.summary.as_str())
    }

    pub fn is_winner(&self) -> bool {
        self.winner == Some(true)
    }

    pub fn is_home(&self) -> bool {
        self.home_away == HomeAway::Home
    }
}
