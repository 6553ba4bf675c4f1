//! Bowl Scoreboard Exporter Library
//!
//! This library polls the college football scoreboard and publishes bowl
//! game state as Prometheus gauges.
//!
//! # Examples
//!
//! ```rust,no_run
//! use bowl_scoreboard_exporter::config::Config;
//! use bowl_scoreboard_exporter::data_fetcher::{HttpScoreboardSource, ScoreboardSource};
//! use bowl_scoreboard_exporter::error::AppError;
//! use bowl_scoreboard_exporter::metrics::{BowlMetrics, MetricsProjector};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::default();
//!
//!     // Fetch the scoreboard once
//!     let source = HttpScoreboardSource::from_config(&config)?;
//!     let snapshot = source.fetch_snapshot().await?;
//!
//!     // Project it into the gauge families
//!     let mut projector = MetricsProjector::new(BowlMetrics::new()?, config.record_key.clone());
//!     projector.project(&snapshot);
//!
//!     // Print the exposition text
//!     print!("{}", projector.metrics().render()?);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod exporter;
pub mod metrics;
pub mod server;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{Event, GameResult, Snapshot};
pub use data_fetcher::{HttpScoreboardSource, ScoreboardSource, parse_scoreboard};
pub use error::AppError;
pub use exporter::{ScoreboardExporter, needs_refresh};
pub use metrics::{BowlMetrics, MetricsProjector};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
