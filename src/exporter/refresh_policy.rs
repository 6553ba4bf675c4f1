//! Fetch gating for the poll loop.
//!
//! A new scoreboard is fetched when:
//! - nothing has been fetched yet
//! - any game is in progress
//! - any game has kicked off but is not final yet

use crate::data_fetcher::models::{Event, GameResult, Snapshot};
use chrono::{DateTime, Utc};

/// Whether `event` still changes upstream as of `now`.
///
/// An unparsable kickoff cannot prove the game has started, so only the
/// in-progress check applies to it.
fn is_event_live(event: &Event, now: DateTime<Utc>) -> bool {
    let status = event.game_status();
    if status == GameResult::InProgress {
        tracing::debug!("Refresh needed: {} is in progress", event.name);
        return true;
    }

    match event.kickoff() {
        Ok(kickoff) if kickoff < now && status != GameResult::Final => {
            tracing::debug!(
                "Refresh needed: {} kicked off at {} and is {}",
                event.name,
                kickoff,
                status
            );
            true
        }
        Ok(_) => false,
        Err(e) => {
            tracing::warn!("Skipping kickoff check for {}: {}", event.name, e);
            false
        }
    }
}

/// Decides against the wall clock whether the held snapshot is stale.
pub fn needs_refresh(snapshot: Option<&Snapshot>) -> bool {
    needs_refresh_at(snapshot, Utc::now())
}

/// Same as [`needs_refresh`] with an explicit "now".
pub fn needs_refresh_at(snapshot: Option<&Snapshot>, now: DateTime<Utc>) -> bool {
    let Some(snapshot) = snapshot else {
        return true;
    };

    let live = snapshot.events().iter().any(|event| is_event_live(event, now));
    if !live {
        tracing::debug!(
            "All {} events are final or scheduled in the future",
            snapshot.len()
        );
    }
    live
}
