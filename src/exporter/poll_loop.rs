use std::time::Duration;

use tracing::{debug, error, info, instrument};

use super::refresh_policy::needs_refresh;
use crate::data_fetcher::api::ScoreboardSource;
use crate::data_fetcher::models::Snapshot;
use crate::error::AppError;
use crate::metrics::{MetricsProjector, ProjectionSummary};

/// What a single cycle did before projecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new snapshot was fetched and projected
    Fetched(ProjectionSummary),
    /// The held snapshot was projected again
    Cached(ProjectionSummary),
}

impl CycleOutcome {
    pub fn summary(&self) -> ProjectionSummary {
        match self {
            CycleOutcome::Fetched(summary) | CycleOutcome::Cached(summary) => *summary,
        }
    }

    pub fn fetched(&self) -> bool {
        matches!(self, CycleOutcome::Fetched(_))
    }
}

/// Owns the current snapshot and republishes it on every cycle.
pub struct ScoreboardExporter<S> {
    source: S,
    projector: MetricsProjector,
    snapshot: Option<Snapshot>,
    fetch_interval: Duration,
}

impl<S: ScoreboardSource> ScoreboardExporter<S> {
    pub fn new(source: S, projector: MetricsProjector, fetch_interval: Duration) -> Self {
        Self {
            source,
            projector,
            snapshot: None,
            fetch_interval,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn projector(&self) -> &MetricsProjector {
        &self.projector
    }

    /// Fetches if the held snapshot is missing or stale, then projects.
    ///
    /// # Errors
    /// Any fetch or decode failure is returned unchanged. The held snapshot
    /// is dropped in that case.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome, AppError> {
        let (snapshot, fetched) = match self.snapshot.take() {
            Some(held) if !needs_refresh(Some(&held)) => {
                debug!("Snapshot from {} is current, skipping fetch", held.fetched_at());
                (held, false)
            }
            _ => (self.fetch().await?, true),
        };

        let summary = self.projector.project(&snapshot);
        debug!(
            "Published {} samples for {} competitors ({} pruned)",
            summary.samples, summary.competitors, summary.pruned
        );
        self.snapshot = Some(snapshot);

        Ok(if fetched {
            CycleOutcome::Fetched(summary)
        } else {
            CycleOutcome::Cached(summary)
        })
    }

    async fn fetch(&self) -> Result<Snapshot, AppError> {
        let snapshot = self.source.fetch_snapshot().await.inspect_err(|e| {
            error!("Scoreboard fetch failed: {}", e);
        })?;

        let metrics = self.projector.metrics();
        metrics.fetches.inc();
        metrics
            .last_fetch_timestamp
            .set(snapshot.fetched_at().timestamp() as f64);

        info!("Fetched scoreboard with {} events", snapshot.len());
        Ok(snapshot)
    }

    /// Runs cycles forever, sleeping the fetch interval between them.
    ///
    /// Only returns on the first failed cycle; the caller decides how the
    /// process ends.
    #[instrument(skip(self), fields(interval_secs = self.fetch_interval.as_secs()))]
    pub async fn run(mut self) -> Result<(), AppError> {
        info!("Starting poll loop");
        loop {
            self.run_cycle().await?;
            tokio::time::sleep(self.fetch_interval).await;
        }
    }
}
