use crate::data_fetcher::models::{
    Address, Competition, Competitor, Event, GameResult, HomeAway, Note, Status,
    StatusType, Team, Venue,
};

/// Team location, team name and score as they appear upstream.
pub type TeamLine<'a> = (&'a str, &'a str, &'a str);

/// Test utilities for building scoreboard payloads without JSON
pub struct ScoreboardBuilder;

impl ScoreboardBuilder {
    /// Creates a bowl event with a home and an away competitor.
    ///
    /// Every event is played at Brooks Stadium unless changed with
    /// [`ScoreboardBuilder::with_venue`].
    pub fn event(
        bowl_name: &str,
        date: &str,
        home: TeamLine<'_>,
        away: TeamLine<'_>,
        status: Status,
    ) -> Event {
        let slug = bowl_name.to_lowercase().replace(' ', "-");
        let competition = Competition {
            id: slug.clone(),
            date: date.to_string(),
            start_date: date.to_string(),
            neutral_site: true,
            venue: Venue {
                id: "3791".to_string(),
                full_name: "Brooks Stadium".to_string(),
                address: Address {
                    city: "Conway".to_string(),
                    state: "SC".to_string(),
                },
                capacity: 21000,
                indoor: false,
            },
            notes: vec![Note {
                note_type: "event".to_string(),
                headline: bowl_name.to_string(),
            }],
            status,
            competitors: vec![
                Self::competitor(home, HomeAway::Home),
                Self::competitor(away, HomeAway::Away),
            ],
        };

        Event {
            id: slug,
            date: date.to_string(),
            name: format!("{} at {}", away.1, home.1),
            short_name: format!("{} @ {}", away.0, home.0),
            competitions: vec![competition],
            ..Default::default()
        }
    }

    /// Creates a finished game; the higher score is flagged as winner.
    pub fn final_event(bowl_name: &str, date: &str, home: TeamLine<'_>, away: TeamLine<'_>) -> Event {
        let mut event = Self::event(
            bowl_name,
            date,
            home,
            away,
            Self::status(GameResult::Final, 4, 0.0),
        );

        let home_score: i64 = home.2.parse().unwrap_or(0);
        let away_score: i64 = away.2.parse().unwrap_or(0);
        let competitors = &mut event.competitions[0].competitors;
        competitors[0].winner = Some(home_score > away_score);
        competitors[1].winner = Some(away_score > home_score);
        event
    }

    /// Creates a game in progress with no winner flag set.
    pub fn in_progress_event(
        bowl_name: &str,
        date: &str,
        home: TeamLine<'_>,
        away: TeamLine<'_>,
        period: i32,
        clock: f64,
    ) -> Event {
        Self::event(
            bowl_name,
            date,
            home,
            away,
            Self::status(GameResult::InProgress, period, clock),
        )
    }

    /// Creates a game that has not started; scores are zero.
    pub fn scheduled_event(bowl_name: &str, date: &str, home: (&str, &str), away: (&str, &str)) -> Event {
        Self::event(
            bowl_name,
            date,
            (home.0, home.1, "0"),
            (away.0, away.1, "0"),
            Self::status(GameResult::Scheduled, 0, 0.0),
        )
    }

    pub fn with_venue(mut event: Event, venue: &str) -> Event {
        if let Some(competition) = event.competitions.first_mut() {
            competition.venue.full_name = venue.to_string();
        }
        event
    }

    pub fn status(result: GameResult, period: i32, clock: f64) -> Status {
        let (state, completed) = match result {
            GameResult::Scheduled => ("pre", false),
            GameResult::InProgress => ("in", false),
            GameResult::Final => ("post", true),
            GameResult::Unknown => ("", false),
        };

        Status {
            clock,
            display_clock: format!("{}:{:02}", (clock as i64) / 60, (clock as i64) % 60),
            period,
            status_type: StatusType {
                name: result,
                state: state.to_string(),
                completed,
                ..Default::default()
            },
        }
    }

    fn competitor(line: TeamLine<'_>, home_away: HomeAway) -> Competitor {
        let (location, name, score) = line;
        Competitor {
            id: format!("{location}-{name}"),
            competitor_type: "team".to_string(),
            home_away,
            team: Team {
                location: location.to_string(),
                name: name.to_string(),
                display_name: format!("{location} {name}"),
                short_display_name: name.to_string(),
                ..Default::default()
            },
            score: score.to_string(),
            ..Default::default()
        }
    }
}
