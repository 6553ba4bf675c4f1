use super::scoreboard::{Event, ScoreboardResponse};
use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use tracing::warn;

/// Result of one successful fetch and parse.
///
/// Events are ordered by kickoff, latest first. Events whose kickoff cannot
/// be parsed come after every event that can, in their upstream order.
#[derive(Debug, Clone)]
pub struct Snapshot {
    events: Vec<Event>,
    fetched_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(mut events: Vec<Event>, fetched_at: DateTime<Utc>) -> Self {
        // `None` orders below every `Some`, so under `Reverse` it sorts last.
        events.sort_by_cached_key(|event| {
            Reverse(match event.kickoff() {
                Ok(kickoff) => Some(kickoff),
                Err(e) => {
                    warn!("Event {} ({}) has unsortable kickoff: {}", event.id, event.name, e);
                    None
                }
            })
        });

        Self { events, fetched_at }
    }

    pub fn from_response(response: ScoreboardResponse, fetched_at: DateTime<Utc>) -> Self {
        Self::new(response.events, fetched_at)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
