use crate::constants::scoreboard::{BOWL_DATE_FORMAT, SHORT_KICKOFF_SEPARATOR};
use crate::error::AppError;
use chrono::{DateTime, Utc};

/// Rewrites the scoreboard's short kickoff format into RFC 3339.
///
/// The scoreboard omits seconds, e.g. "2022-12-17T16:00Z". The seconds are
/// inserted in front of the `Z` designator, giving "2022-12-17T16:00:00Z".
/// Returns `None` when the value has no `Z` designator to anchor on.
///
/// # Examples
///
/// ```
/// use bowl_scoreboard_exporter::data_fetcher::processors::normalize_kickoff;
///
/// assert_eq!(
///     normalize_kickoff("2022-12-17T16:00Z").as_deref(),
///     Some("2022-12-17T16:00:00Z")
/// );
/// assert_eq!(normalize_kickoff("2022-12-17"), None);
/// ```
pub fn normalize_kickoff(raw: &str) -> Option<String> {
    let (head, tail) = raw.split_once(SHORT_KICKOFF_SEPARATOR)?;
    Some(format!("{head}:00{SHORT_KICKOFF_SEPARATOR}{tail}"))
}

/// Parses an upstream kickoff timestamp into UTC.
///
/// Fully qualified RFC 3339 values are accepted as-is; otherwise the short
/// scoreboard format is normalized first.
///
/// # Errors
///
/// Returns [`AppError::TimeFormat`] when neither form parses. Callers treat
/// this as a per-event anomaly, not a fetch failure.
pub fn parse_kickoff(raw: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    let normalized = normalize_kickoff(raw)
        .ok_or_else(|| AppError::time_format(raw, "missing 'Z' time designator"))?;

    DateTime::parse_from_rfc3339(&normalized)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| AppError::time_format(raw, e.to_string()))
}

/// Formats a kickoff for the `date` label, e.g. "Sat, 17 Dec 2022".
pub fn format_bowl_date(kickoff: DateTime<Utc>) -> String {
    kickoff.format(BOWL_DATE_FORMAT).to_string()
}
