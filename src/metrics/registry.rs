//! Metric families exported by the bowl exporter

use prometheus::{Gauge, GaugeVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::constants::metrics::NAMESPACE;
use crate::error::AppError;

/// Labels of the score, winner and in-progress families.
pub const TEAM_LABELS: [&str; 7] = [
    "bowl_name",
    "venue",
    "date",
    "date_time",
    "home_away",
    "team_name",
    "record",
];

/// Labels of the quarter, time-remaining and home-team families.
pub const FULL_LABELS: [&str; 8] = [
    "bowl_name",
    "venue",
    "date",
    "date_time",
    "home_away",
    "team_location",
    "team_name",
    "record",
];

/// The six per-competitor gauge families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GaugeFamily {
    Score,
    Quarter,
    TimeRemaining,
    Winner,
    InProgress,
    HomeTeam,
}

impl GaugeFamily {
    pub const ALL: [GaugeFamily; 6] = [
        GaugeFamily::Score,
        GaugeFamily::Quarter,
        GaugeFamily::TimeRemaining,
        GaugeFamily::Winner,
        GaugeFamily::InProgress,
        GaugeFamily::HomeTeam,
    ];

    /// Metric name without the namespace prefix.
    pub fn name(&self) -> &'static str {
        match self {
            GaugeFamily::Score => "team_score",
            GaugeFamily::Quarter => "quarter",
            GaugeFamily::TimeRemaining => "time_remaining",
            GaugeFamily::Winner => "winner",
            GaugeFamily::InProgress => "in_progress",
            GaugeFamily::HomeTeam => "home_team",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            GaugeFamily::Score => "current score for team",
            GaugeFamily::Quarter => "current quarter or 1 for not started",
            GaugeFamily::TimeRemaining => "Time remaining in quarter",
            GaugeFamily::Winner => "1 if the team is the winner, 0 if loser or game not finished",
            GaugeFamily::InProgress => "1 if the game is in progress, 0 otherwise",
            GaugeFamily::HomeTeam => "1 if the team is the home team, 0 if away",
        }
    }

    /// Whether the family carries the `team_location` label.
    pub fn includes_location(&self) -> bool {
        matches!(
            self,
            GaugeFamily::Quarter | GaugeFamily::TimeRemaining | GaugeFamily::HomeTeam
        )
    }

    pub fn label_names(&self) -> &'static [&'static str] {
        if self.includes_location() {
            &FULL_LABELS
        } else {
            &TEAM_LABELS
        }
    }

    /// Fully qualified name as it appears in the exposition.
    pub fn qualified_name(&self) -> String {
        format!("{NAMESPACE}_{}", self.name())
    }
}

/// Registry plus handles to every family the exporter writes.
///
/// Handles are cheap clones sharing state with the registry, so the poll
/// loop can write while the scrape endpoint gathers.
#[derive(Clone)]
pub struct BowlMetrics {
    registry: Registry,
    score: GaugeVec,
    quarter: GaugeVec,
    time_remaining: GaugeVec,
    winner: GaugeVec,
    in_progress: GaugeVec,
    home_team: GaugeVec,
    /// Successful scoreboard fetches
    pub fetches: IntCounter,
    /// Unix time of the last successful fetch
    pub last_fetch_timestamp: Gauge,
    /// Values replaced by a fallback, by field
    pub value_defaults: IntCounterVec,
}

impl BowlMetrics {
    /// Creates the families in a fresh private registry.
    pub fn new() -> Result<Self, AppError> {
        Self::with_registry(Registry::new())
    }

    /// Creates the families and registers them in `registry`.
    ///
    /// # Errors
    /// Returns `AppError::Metrics` if a family is already registered there.
    pub fn with_registry(registry: Registry) -> Result<Self, AppError> {
        let gauge = |family: GaugeFamily| -> Result<GaugeVec, AppError> {
            let vec = GaugeVec::new(
                Opts::new(family.name(), family.help()).namespace(NAMESPACE),
                family.label_names(),
            )?;
            registry.register(Box::new(vec.clone()))?;
            Ok(vec)
        };

        let score = gauge(GaugeFamily::Score)?;
        let quarter = gauge(GaugeFamily::Quarter)?;
        let time_remaining = gauge(GaugeFamily::TimeRemaining)?;
        let winner = gauge(GaugeFamily::Winner)?;
        let in_progress = gauge(GaugeFamily::InProgress)?;
        let home_team = gauge(GaugeFamily::HomeTeam)?;

        let fetches = IntCounter::with_opts(
            Opts::new("scoreboard_fetches_total", "successful scoreboard fetches")
                .namespace(NAMESPACE),
        )?;
        registry.register(Box::new(fetches.clone()))?;

        let last_fetch_timestamp = Gauge::with_opts(
            Opts::new(
                "last_fetch_timestamp_seconds",
                "unix time of the last successful scoreboard fetch",
            )
            .namespace(NAMESPACE),
        )?;
        registry.register(Box::new(last_fetch_timestamp.clone()))?;

        let value_defaults = IntCounterVec::new(
            Opts::new(
                "value_defaults_total",
                "scoreboard values replaced by a default, counted once per fetched snapshot",
            )
            .namespace(NAMESPACE),
            &["field"],
        )?;
        registry.register(Box::new(value_defaults.clone()))?;

        Ok(Self {
            registry,
            score,
            quarter,
            time_remaining,
            winner,
            in_progress,
            home_team,
            fetches,
            last_fetch_timestamp,
            value_defaults,
        })
    }

    pub fn gauge(&self, family: GaugeFamily) -> &GaugeVec {
        match family {
            GaugeFamily::Score => &self.score,
            GaugeFamily::Quarter => &self.quarter,
            GaugeFamily::TimeRemaining => &self.time_remaining,
            GaugeFamily::Winner => &self.winner,
            GaugeFamily::InProgress => &self.in_progress,
            GaugeFamily::HomeTeam => &self.home_team,
        }
    }

    /// Current value of one series, read from a gather of the registry.
    ///
    /// Returns `None` when the series was never written or has been pruned,
    /// and when the label count does not match the family. The lookup never
    /// creates a series.
    pub fn gauge_value(&self, family: GaugeFamily, labels: &[&str]) -> Option<f64> {
        let names = family.label_names();
        if names.len() != labels.len() {
            return None;
        }

        let qualified = family.qualified_name();
        let families = self.registry.gather();
        let gathered = families.iter().find(|mf| mf.get_name() == qualified)?;

        gathered
            .get_metric()
            .iter()
            .find(|metric| {
                let pairs = metric.get_label();
                pairs.len() == names.len()
                    && names.iter().zip(labels).all(|(name, value)| {
                        pairs
                            .iter()
                            .any(|pair| pair.get_name() == *name && pair.get_value() == *value)
                    })
            })
            .map(|metric| metric.get_gauge().value())
    }

    /// Renders every registered family in the text exposition format.
    pub fn render(&self) -> Result<String, AppError> {
        render_registry(&self.registry)
    }
}

/// Text exposition of everything registered in `registry`.
pub fn render_registry(registry: &Registry) -> Result<String, AppError> {
    let mut buffer = String::new();
    TextEncoder::new().encode_utf8(&registry.gather(), &mut buffer)?;
    Ok(buffer)
}
