use crate::cli::Args;
use bowl_scoreboard_exporter::config::Config;
use bowl_scoreboard_exporter::constants::DEFAULT_LOG_FILE_NAME;
use bowl_scoreboard_exporter::error::AppError;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn crate_filter(debug: bool) -> Result<EnvFilter, AppError> {
    let level = if debug { "debug" } else { "info" };
    let directive = format!("bowl_scoreboard_exporter={level}")
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Splits a log file path into the directory and file name the rolling
/// appender expects.
fn split_log_path(custom_path: &str) -> (String, String) {
    let path = Path::new(custom_path);
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(DEFAULT_LOG_FILE_NAME);
    (parent.to_string_lossy().to_string(), file_name.to_string())
}

/// Sets up logging for the process.
///
/// - Console output goes to stdout, or stderr for one-shot runs so their
///   output stays clean
/// - A daily rolling file is added when `--log-file` or the configured log
///   path is set
/// - `--debug` raises this crate to debug level; `RUST_LOG` still applies
///
/// Returns the file writer guard, which must be kept alive for the duration
/// of the program to ensure logs are flushed.
pub fn setup_logging(args: &Args, config: &Config) -> Result<Option<WorkerGuard>, AppError> {
    let oneshot = args.is_oneshot();
    let console_writer = if oneshot {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    };
    let console_layer = fmt::Layer::new()
        .with_writer(console_writer)
        .with_ansi(!oneshot)
        .with_filter(crate_filter(args.debug)?);

    let log_path = args.log_file.as_ref().or(config.log_file_path.as_ref());
    let (file_layer, guard) = match log_path {
        Some(custom_path) => {
            let (log_dir, log_file_name) = split_log_path(custom_path);
            if !Path::new(&log_dir).exists() {
                std::fs::create_dir_all(&log_dir).map_err(|e| {
                    AppError::log_setup_error(format!("Failed to create log directory: {e}"))
                })?;
            }

            let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(crate_filter(args.debug)?);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    if let Some(path) = log_path {
        tracing::debug!("Writing logs to {}", path);
    }
    Ok(guard)
}
