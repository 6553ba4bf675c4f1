//! Application-wide constants and configuration defaults
//!
//! This module centralizes the magic numbers and upstream format strings
//! so the config layer, the fetcher and the projector agree on them.

/// Public ESPN college football scoreboard
pub const DEFAULT_API_ENDPOINT: &str =
    "http://site.api.espn.com/apis/site/v2/sports/football/college-football/scoreboard";

/// Default interval between poll cycles in seconds
pub const DEFAULT_FETCH_INTERVAL_SECONDS: u64 = 60;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Default port for the `/metrics` endpoint
pub const DEFAULT_METRICS_PORT: u16 = 9180;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Name of the configuration file searched for in the config directories
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory under the platform config dir
pub const APP_DIR_NAME: &str = "bowl_scoreboard_exporter";

/// System-wide configuration directory
pub const SYSTEM_CONFIG_DIR: &str = "/etc/bowl-scoreboard-exporter";

/// Default log file name when a log directory is configured
pub const DEFAULT_LOG_FILE_NAME: &str = "bowl_scoreboard_exporter.log";

/// Environment variable overrides
pub mod env {
    pub const API_ENDPOINT: &str = "BOWL_EXPORTER_API_ENDPOINT";
    pub const FETCH_INTERVAL: &str = "BOWL_EXPORTER_FETCH_INTERVAL";
    pub const PORT: &str = "BOWL_EXPORTER_PORT";
    pub const HTTP_TIMEOUT: &str = "BOWL_EXPORTER_HTTP_TIMEOUT";
    pub const LOG_FILE: &str = "BOWL_EXPORTER_LOG_FILE";
}

/// Metric naming
pub mod metrics {
    /// Prefix for every exported metric family
    pub const NAMESPACE: &str = "bowl_exporter";

    /// Content type of the Prometheus text exposition format
    pub const TEXT_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";
}

/// Upstream payload conventions
pub mod scoreboard {
    /// Record name looked up for a competitor's overall record.
    ///
    /// This is the key the exporter has always used. The live API names the
    /// entry "overall", so by default the lookup falls through to
    /// [`DEFAULT_RECORD`]. Override with `record_key` in the config file.
    pub const OVERALL_RECORD_KEY: &str = "overvall";

    /// Record label used when no matching record entry exists
    pub const DEFAULT_RECORD: &str = "0-0";

    /// Format of the `date` label, e.g. "Sat, 17 Dec 2022"
    pub const BOWL_DATE_FORMAT: &str = "%a, %d %b %Y";

    /// UTC designator that seconds are inserted before when upstream omits
    /// them ("2022-12-17T16:00Z" becomes "2022-12-17T16:00:00Z")
    pub const SHORT_KICKOFF_SEPARATOR: char = 'Z';
}
