use crate::constants::{self, env};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tokio::fs;
use tracing::debug;

pub mod paths;
pub mod validation;

use paths::{config_search_paths, find_config_file};
use validation::validate_config;

/// Settings for the Prometheus scrape endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PromConfig {
    /// Port the `/metrics` endpoint listens on
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

impl Default for PromConfig {
    fn default() -> Self {
        Self {
            port: default_metrics_port(),
        }
    }
}

/// Configuration structure for the exporter.
///
/// Every key is optional in the file. Empty or zero values fall back to the
/// defaults in [`crate::constants`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Scoreboard URL fetched with a plain GET
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
    /// Seconds between poll cycles
    #[serde(default = "default_fetch_interval")]
    pub fetch_interval_seconds: u64,
    /// HTTP timeout in seconds for scoreboard requests
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Record name used for the `record` label
    #[serde(default = "default_record_key")]
    pub record_key: String,
    /// Path to the log file. When unset, logs go to stdout only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    #[serde(default)]
    pub prom: PromConfig,
}

fn default_api_endpoint() -> String {
    constants::DEFAULT_API_ENDPOINT.to_string()
}

fn default_fetch_interval() -> u64 {
    constants::DEFAULT_FETCH_INTERVAL_SECONDS
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_record_key() -> String {
    constants::scoreboard::OVERALL_RECORD_KEY.to_string()
}

fn default_metrics_port() -> u16 {
    constants::DEFAULT_METRICS_PORT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_endpoint: default_api_endpoint(),
            fetch_interval_seconds: default_fetch_interval(),
            http_timeout_seconds: default_http_timeout(),
            record_key: default_record_key(),
            log_file_path: None,
            prom: PromConfig::default(),
        }
    }
}

impl Config {
    /// Loads the configuration used at startup.
    ///
    /// With `explicit_path`, that file must exist. Otherwise the first file
    /// found in [`paths::config_search_paths`] is used. When no file exists
    /// the defaults are accepted only if `BOWL_EXPORTER_API_ENDPOINT` is set.
    /// Environment variables take precedence over file values.
    ///
    /// # Environment Variables
    /// - `BOWL_EXPORTER_API_ENDPOINT` - Override scoreboard URL
    /// - `BOWL_EXPORTER_FETCH_INTERVAL` - Override fetch interval in seconds
    /// - `BOWL_EXPORTER_PORT` - Override metrics port
    /// - `BOWL_EXPORTER_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `BOWL_EXPORTER_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok((Config, Option<PathBuf>))` - Validated configuration and the file it came from
    /// * `Err(AppError)` - Missing, unreadable, malformed or invalid configuration
    pub async fn load(explicit_path: Option<&Path>) -> Result<(Self, Option<PathBuf>), AppError> {
        let source = match explicit_path {
            Some(path) => Some(path.to_path_buf()),
            None => find_config_file(),
        };

        let mut config = match &source {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::load_from_path(path).await?
            }
            None if std::env::var(env::API_ENDPOINT).is_ok() => {
                debug!("No configuration file found, using defaults and environment");
                Config::default()
            }
            None => {
                let searched: Vec<String> = config_search_paths()
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect();
                return Err(AppError::config_error(format!(
                    "No configuration file found (searched: {}); pass --config or set {}",
                    searched.join(", "),
                    env::API_ENDPOINT
                )));
            }
        };

        config.apply_env_overrides_from(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok((config, source))
    }

    /// Reads and parses a config file without consulting the environment.
    pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|e| {
            AppError::config_error(format!(
                "Cannot read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML content, filling empty or zero values with defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let mut config: Config = toml::from_str(content)?;
        config.apply_defaults();
        Ok(config)
    }

    fn apply_defaults(&mut self) {
        if self.api_endpoint.trim().is_empty() {
            self.api_endpoint = default_api_endpoint();
        }
        if self.fetch_interval_seconds == 0 {
            self.fetch_interval_seconds = default_fetch_interval();
        }
        if self.http_timeout_seconds == 0 {
            self.http_timeout_seconds = default_http_timeout();
        }
        if self.record_key.is_empty() {
            self.record_key = default_record_key();
        }
        if self.prom.port == 0 {
            self.prom.port = default_metrics_port();
        }
    }

    /// Applies environment overrides using `lookup` to resolve variables.
    ///
    /// # Errors
    /// Returns `AppError::Config` when a numeric variable does not parse.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(env::API_ENDPOINT) {
            self.api_endpoint = endpoint;
        }

        if let Some(interval) = parse_env(&lookup, env::FETCH_INTERVAL)? {
            self.fetch_interval_seconds = interval;
        }

        if let Some(port) = parse_env(&lookup, env::PORT)? {
            self.prom.port = port;
        }

        if let Some(timeout) = parse_env(&lookup, env::HTTP_TIMEOUT)? {
            self.http_timeout_seconds = timeout;
        }

        if let Some(log_file_path) = lookup(env::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    pub fn fetch_interval(&self) -> Duration {
        Duration::from_secs(self.fetch_interval_seconds)
    }

    /// Address the scrape endpoint binds to (all interfaces).
    pub fn metrics_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.prom.port))
    }

    /// Displays the effective configuration to stdout.
    pub fn display(&self, source: Option<&Path>) {
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        match source {
            Some(path) => println!("{}", path.display()),
            None => println!("(none, defaults and environment)"),
        }
        println!("────────────────────────────────────");
        println!("API Endpoint:");
        println!("{}", self.api_endpoint);
        println!("────────────────────────────────────");
        println!("Fetch Interval:");
        println!("{} seconds", self.fetch_interval_seconds);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", self.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Metrics Port:");
        println!("{}", self.prom.port);
        println!("────────────────────────────────────");
        println!("Record Key:");
        println!("{}", self.record_key);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        match &self.log_file_path {
            Some(custom_path) => println!("{custom_path}"),
            None => println!("(stdout only)"),
        }
    }
}

fn parse_env<T, F>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| {
                AppError::config_error(format!("Invalid value '{raw}' for {key}: {e}"))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config_content = r#"
api_endpoint = "https://api.example.com/scoreboard"
fetch_interval_seconds = 30
log_file_path = "/custom/log/path.log"

[prom]
port = 9200
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path).await.unwrap();

        assert_eq!(config.api_endpoint, "https://api.example.com/scoreboard");
        assert_eq!(config.fetch_interval_seconds, 30);
        assert_eq!(config.http_timeout_seconds, 10);
        assert_eq!(config.prom.port, 9200);
        assert_eq!(config.record_key, "overvall");
        assert_eq!(config.log_file_path, Some("/custom/log/path.log".to_string()));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.fetch_interval(), Duration::from_secs(60));
        assert_eq!(config.metrics_addr().port(), 9180);
    }

    #[test]
    fn test_zero_values_fall_back_to_defaults() {
        let config = Config::from_toml_str(
            r#"
api_endpoint = ""
fetch_interval_seconds = 0
record_key = ""

[prom]
port = 0
"#,
        )
        .unwrap();

        assert_eq!(config.api_endpoint, constants::DEFAULT_API_ENDPOINT);
        assert_eq!(config.fetch_interval_seconds, 60);
        assert_eq!(config.record_key, "overvall");
        assert_eq!(config.prom.port, 9180);
    }

    #[test]
    fn test_record_key_override() {
        let config = Config::from_toml_str(r#"record_key = "overall""#).unwrap();
        assert_eq!(config.record_key, "overall");
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml_str("api_endpoint = [1, 2");
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[test]
    fn test_wrong_type() {
        let result = Config::from_toml_str(r#"fetch_interval_seconds = "60s""#);
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    async fn test_load_from_missing_path() {
        let temp_dir = tempdir().unwrap();
        let result = Config::load_from_path(temp_dir.path().join("missing.toml")).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_overrides_from(lookup_from(&[
                (env::API_ENDPOINT, "http://localhost:8080/scoreboard"),
                (env::FETCH_INTERVAL, "15"),
                (env::PORT, "9999"),
                (env::HTTP_TIMEOUT, " 5 "),
                (env::LOG_FILE, "/tmp/exporter.log"),
            ]))
            .unwrap();

        assert_eq!(config.api_endpoint, "http://localhost:8080/scoreboard");
        assert_eq!(config.fetch_interval_seconds, 15);
        assert_eq!(config.prom.port, 9999);
        assert_eq!(config.http_timeout_seconds, 5);
        assert_eq!(config.log_file_path, Some("/tmp/exporter.log".to_string()));
    }

    #[test]
    fn test_env_override_invalid_number() {
        let mut config = Config::default();
        let result = config.apply_env_overrides_from(lookup_from(&[(env::PORT, "ninety")]));

        let error = result.unwrap_err();
        assert!(matches!(error, AppError::Config(_)));
        assert!(error.to_string().contains(env::PORT));
    }

    #[tokio::test]
    #[serial]
    async fn test_load_explicit_path_with_environment() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("exporter.toml");
        tokio::fs::write(&config_path, "fetch_interval_seconds = 120\n")
            .await
            .unwrap();

        unsafe {
            std::env::set_var(env::PORT, "9300");
        }

        let result = Config::load(Some(&config_path)).await;

        unsafe {
            std::env::remove_var(env::PORT);
        }

        let (config, source) = result.unwrap();
        assert_eq!(config.fetch_interval_seconds, 120);
        assert_eq!(config.prom.port, 9300);
        assert_eq!(source.as_deref(), Some(config_path.as_path()));
    }

    #[tokio::test]
    #[serial]
    async fn test_load_explicit_missing_path_fails() {
        let temp_dir = tempdir().unwrap();
        let result = Config::load(Some(&temp_dir.path().join("absent.toml"))).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[tokio::test]
    #[serial]
    async fn test_load_rejects_invalid_file_values() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, r#"api_endpoint = "site.api.espn.com""#)
            .await
            .unwrap();

        let result = Config::load(Some(&config_path)).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_config_serialization_skips_missing_log_path() {
        let toml_string = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(toml_string.contains("api_endpoint"));
        assert!(toml_string.contains("[prom]"));
        assert!(!toml_string.contains("log_file_path"));
    }

    #[test]
    fn test_config_display_runs() {
        Config::default().display(None);
        Config::default().display(Some(Path::new("/etc/bowl-scoreboard-exporter/config.toml")));
    }
}
