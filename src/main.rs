// src/main.rs
mod cli;
mod logging;

use bowl_scoreboard_exporter::config::Config;
use bowl_scoreboard_exporter::data_fetcher::{HttpScoreboardSource, ScoreboardSource};
use bowl_scoreboard_exporter::error::AppError;
use bowl_scoreboard_exporter::exporter::ScoreboardExporter;
use bowl_scoreboard_exporter::metrics::{BowlMetrics, MetricsProjector};
use bowl_scoreboard_exporter::server::serve_metrics;
use clap::Parser;
use cli::Args;
use logging::setup_logging;
use std::io::Write;

/// Applies command line overrides, which take precedence over file and
/// environment values.
fn apply_cli_overrides(config: &mut Config, args: &Args) -> Result<(), AppError> {
    if let Some(endpoint) = &args.endpoint {
        config.api_endpoint = endpoint.clone();
    }
    if let Some(interval) = args.fetch_interval {
        config.fetch_interval_seconds = interval;
    }
    if let Some(port) = args.port {
        config.prom.port = port;
    }
    if let Some(log_file) = &args.log_file {
        config.log_file_path = Some(log_file.clone());
    }
    config.validate()
}

/// Fetches once and writes the exposition text to stdout.
async fn run_once(config: &Config, metrics: BowlMetrics) -> Result<(), AppError> {
    let source = HttpScoreboardSource::from_config(config)?;
    let snapshot = source.fetch_snapshot().await?;

    let mut projector = MetricsProjector::new(metrics, config.record_key.clone());
    let summary = projector.project(&snapshot);
    tracing::info!(
        "Projected {} events into {} samples",
        snapshot.len(),
        summary.samples
    );

    let text = projector.metrics().render()?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Serves `/metrics` while the poll loop runs. The first of the two to fail
/// ends the process.
async fn run_exporter(config: Config, metrics: BowlMetrics) -> Result<(), AppError> {
    let source = HttpScoreboardSource::from_config(&config)?;
    tracing::info!(
        "Polling {} every {}s",
        source.endpoint(),
        config.fetch_interval_seconds
    );

    let projector = MetricsProjector::new(metrics.clone(), config.record_key.clone());
    let exporter = ScoreboardExporter::new(source, projector, config.fetch_interval());
    let server = serve_metrics(config.metrics_addr(), metrics);

    tokio::select! {
        result = exporter.run() => {
            // run() only returns on failure
            result
        }
        result = server => {
            result
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            tracing::info!("Received Ctrl-C, shutting down");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (mut config, source) = Config::load(args.config.as_deref()).await?;
    apply_cli_overrides(&mut config, &args)?;

    if args.list_config {
        config.display(source.as_deref());
        return Ok(());
    }

    // Guard is held until main returns so buffered file logs are flushed
    let _guard = setup_logging(&args, &config)?;

    tracing::info!(
        "Starting {} {}",
        bowl_scoreboard_exporter::NAME,
        bowl_scoreboard_exporter::VERSION
    );
    if let Some(path) = &source {
        tracing::info!("Using configuration from {}", path.display());
    }

    let metrics = BowlMetrics::new()?;
    let result = if args.once {
        run_once(&config, metrics).await
    } else {
        run_exporter(config, metrics).await
    };

    if let Err(e) = &result {
        tracing::error!("Exporter stopped ({}): {}", e.category(), e);
    }
    result
}
