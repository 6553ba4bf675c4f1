use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Bowl Scoreboard Exporter
///
/// Polls the college football scoreboard and publishes bowl game scores,
/// clock and status as Prometheus gauges on /metrics.
///
/// The scoreboard is fetched again only while a game is in progress or
/// has kicked off without a final result; otherwise the last snapshot is
/// republished every interval.
#[derive(Parser, Debug, Default)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Path to a TOML config file. Without it the working directory, the user
    /// config directory and /etc/bowl-scoreboard-exporter are searched.
    #[arg(long = "config", short = 'c', help_heading = "Configuration")]
    pub config: Option<PathBuf>,

    /// Scoreboard URL to poll. Overrides config and environment.
    #[arg(long = "endpoint", help_heading = "Configuration")]
    pub endpoint: Option<String>,

    /// Seconds between poll cycles.
    #[arg(long = "fetch-interval", help_heading = "Configuration")]
    pub fetch_interval: Option<u64>,

    /// Port the metrics server listens on.
    #[arg(long = "port", short = 'p', help_heading = "Configuration")]
    pub port: Option<u16>,

    /// List current configuration settings and exit
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Fetch once, print the exposition text to stdout and exit.
    #[arg(short, long)]
    pub once: bool,

    /// Enable debug logging for this crate.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Also write logs to this file, rotated daily.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Whether the process exits after a single action instead of serving.
    pub fn is_oneshot(&self) -> bool {
        self.once || self.list_config
    }
}
