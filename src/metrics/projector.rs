use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::registry::{BowlMetrics, GaugeFamily};
use crate::constants::scoreboard::DEFAULT_RECORD;
use crate::data_fetcher::models::{Competition, Competitor, Event, GameResult, Snapshot};

/// Label values identifying one competitor's series.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompetitorLabels {
    pub bowl_name: String,
    pub venue: String,
    pub date: String,
    pub date_time: String,
    pub home_away: String,
    pub team_location: String,
    pub team_name: String,
    pub record: String,
}

impl CompetitorLabels {
    /// Values in the order of the family's label names.
    pub fn values_for(&self, family: GaugeFamily) -> Vec<&str> {
        let mut values = vec![
            self.bowl_name.as_str(),
            self.venue.as_str(),
            self.date.as_str(),
            self.date_time.as_str(),
            self.home_away.as_str(),
        ];
        if family.includes_location() {
            values.push(self.team_location.as_str());
        }
        values.push(self.team_name.as_str());
        values.push(self.record.as_str());
        values
    }
}

/// One competitor's gauge values for a single projection.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorReading {
    pub labels: CompetitorLabels,
    pub score: f64,
    pub quarter: f64,
    pub time_remaining: f64,
    pub winner: f64,
    pub in_progress: f64,
    pub home_team: f64,
    /// Score was not numeric and fell back to 0
    pub score_defaulted: bool,
    /// No record matched the key and "0-0" was used
    pub record_defaulted: bool,
}

impl CompetitorReading {
    pub fn value(&self, family: GaugeFamily) -> f64 {
        match family {
            GaugeFamily::Score => self.score,
            GaugeFamily::Quarter => self.quarter,
            GaugeFamily::TimeRemaining => self.time_remaining,
            GaugeFamily::Winner => self.winner,
            GaugeFamily::InProgress => self.in_progress,
            GaugeFamily::HomeTeam => self.home_team,
        }
    }
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

fn read_competitor(
    event: &Event,
    date: &str,
    competition: &Competition,
    competitor: &Competitor,
    record_key: &str,
) -> CompetitorReading {
    let score = competitor.numeric_score();
    let record = competitor.record_summary(record_key);

    CompetitorReading {
        labels: CompetitorLabels {
            bowl_name: competition.bowl_name().to_string(),
            venue: competition.venue.full_name.clone(),
            date: date.to_string(),
            date_time: event.date.clone(),
            home_away: competitor.home_away.as_str().to_string(),
            team_location: competitor.team.location.clone(),
            team_name: competitor.team.name.clone(),
            record: record.unwrap_or(DEFAULT_RECORD).to_string(),
        },
        score: score.unwrap_or(0) as f64,
        quarter: f64::from(competition.status.period),
        time_remaining: competition.status.clock,
        winner: flag(competitor.is_winner()),
        in_progress: flag(competition.game_status() == GameResult::InProgress),
        home_team: flag(competitor.is_home()),
        score_defaulted: score.is_none(),
        record_defaulted: record.is_none(),
    }
}

/// Computes a reading for every competitor of every event, in snapshot order.
///
/// Events without a competition contribute nothing. An unparsable kickoff
/// leaves the `date` label empty.
pub fn read_snapshot(snapshot: &Snapshot, record_key: &str) -> Vec<CompetitorReading> {
    let mut readings = Vec::new();

    for event in snapshot.events() {
        let Some(competition) = event.competition() else {
            debug!("Event {} has no competition, skipping", event.id);
            continue;
        };

        let date = match event.bowl_date() {
            Ok(date) => date,
            Err(e) => {
                warn!("Event {} kickoff unusable for date label: {}", event.id, e);
                String::new()
            }
        };

        readings.extend(competition.competitors.iter().map(|competitor| {
            read_competitor(event, &date, competition, competitor, record_key)
        }));
    }

    readings
}

/// Result of one projection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionSummary {
    pub competitors: usize,
    pub samples: usize,
    pub pruned: usize,
}

type LabelTuple = Vec<String>;

/// Writes snapshots into the gauge families and prunes series that a later
/// snapshot no longer contains.
pub struct MetricsProjector {
    metrics: BowlMetrics,
    record_key: String,
    published: HashMap<GaugeFamily, HashSet<LabelTuple>>,
    /// Fetch time of the last snapshot whose defaults were counted
    counted_fetch: Option<DateTime<Utc>>,
}

impl MetricsProjector {
    pub fn new(metrics: BowlMetrics, record_key: impl Into<String>) -> Self {
        Self {
            metrics,
            record_key: record_key.into(),
            published: HashMap::new(),
            counted_fetch: None,
        }
    }

    pub fn metrics(&self) -> &BowlMetrics {
        &self.metrics
    }

    /// Sets every gauge for `snapshot`.
    ///
    /// Fallback values are counted in `value_defaults_total` once per fetched
    /// snapshot; projecting the same snapshot again only rewrites gauges.
    pub fn project(&mut self, snapshot: &Snapshot) -> ProjectionSummary {
        let readings = read_snapshot(snapshot, &self.record_key);
        let mut current: HashMap<GaugeFamily, HashSet<LabelTuple>> = HashMap::new();
        let mut samples = 0;

        let fresh = self.counted_fetch != Some(snapshot.fetched_at());
        self.counted_fetch = Some(snapshot.fetched_at());

        for reading in &readings {
            if fresh {
                self.count_defaults(reading);
            }

            for family in GaugeFamily::ALL {
                let values = reading.labels.values_for(family);
                self.metrics
                    .gauge(family)
                    .with_label_values(values.as_slice())
                    .set(reading.value(family));
                samples += 1;

                current
                    .entry(family)
                    .or_default()
                    .insert(values.iter().map(|v| v.to_string()).collect());
            }
        }

        let pruned = self.prune_stale(&current);
        self.published = current;

        ProjectionSummary {
            competitors: readings.len(),
            samples,
            pruned,
        }
    }

    fn count_defaults(&self, reading: &CompetitorReading) {
        if reading.score_defaulted {
            debug!(
                "Non-numeric score for {} in '{}', using 0",
                reading.labels.team_name, reading.labels.bowl_name
            );
            self.metrics.value_defaults.with_label_values(&["score"]).inc();
        }
        if reading.record_defaulted {
            debug!(
                "No '{}' record for {}, using {}",
                self.record_key, reading.labels.team_name, DEFAULT_RECORD
            );
            self.metrics.value_defaults.with_label_values(&["record"]).inc();
        }
    }

    fn prune_stale(&self, current: &HashMap<GaugeFamily, HashSet<LabelTuple>>) -> usize {
        let mut pruned = 0;

        for (family, previous) in &self.published {
            let still_present = current.get(family);
            for tuple in previous {
                if still_present.is_some_and(|set| set.contains(tuple)) {
                    continue;
                }
                let values: Vec<&str> = tuple.iter().map(String::as_str).collect();
                match self.metrics.gauge(*family).remove_label_values(values.as_slice()) {
                    Ok(()) => pruned += 1,
                    Err(e) => debug!("Series of {} already gone: {}", family.name(), e),
                }
            }
        }

        if pruned > 0 {
            debug!("Pruned {} stale series", pruned);
        }
        pruned
    }
}
