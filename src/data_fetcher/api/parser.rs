//! Scoreboard response decoding

use chrono::{DateTime, Utc};
use tracing::{debug, error};

use crate::data_fetcher::models::{ScoreboardResponse, Snapshot};
use crate::error::AppError;

/// Decodes a scoreboard body into a [`Snapshot`] stamped with the current time.
///
/// See [`parse_scoreboard_at`].
pub fn parse_scoreboard(body: &[u8]) -> Result<Snapshot, AppError> {
    parse_scoreboard_at(body, Utc::now())
}

/// Decodes a scoreboard body into a [`Snapshot`] with events ordered latest
/// kickoff first.
///
/// Unparsable kickoffs never fail the decode; those events are logged and
/// placed after the ones that parsed.
///
/// # Errors
/// * `AppError::ApiNoData` - the body is empty
/// * `AppError::ApiMalformedJson` - the body is not JSON at all
/// * `AppError::ApiParse` - JSON that does not match the scoreboard shape
pub fn parse_scoreboard_at(body: &[u8], fetched_at: DateTime<Utc>) -> Result<Snapshot, AppError> {
    match serde_json::from_slice::<ScoreboardResponse>(body) {
        Ok(response) => {
            debug!("Decoded scoreboard with {} events", response.events.len());
            Ok(Snapshot::from_response(response, fetched_at))
        }
        Err(e) => {
            error!("Failed to parse scoreboard response: {}", e);

            let trimmed = body.trim_ascii();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty"))
            } else if !trimmed.starts_with(b"{") && !trimmed.starts_with(b"[") {
                Err(AppError::api_malformed_json("Response is not valid JSON"))
            } else {
                Err(AppError::ApiParse(e))
            }
        }
    }
}
