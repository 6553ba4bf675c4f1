use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API endpoint cannot be empty and must be an http(s) URL
/// - Fetch interval and HTTP timeout must be at least one second
/// - Metrics port cannot be zero
/// - Record key cannot be empty
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let endpoint = config.api_endpoint.trim();
    if endpoint.is_empty() {
        return Err(AppError::config_error("API endpoint cannot be empty"));
    }

    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "API endpoint must be an http:// or https:// URL, got '{endpoint}'"
        )));
    }

    if config.fetch_interval_seconds == 0 {
        return Err(AppError::config_error(
            "Fetch interval must be at least 1 second",
        ));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if config.prom.port == 0 {
        return Err(AppError::config_error("Metrics port cannot be 0"));
    }

    if config.record_key.is_empty() {
        return Err(AppError::config_error("Record key cannot be empty"));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_empty_endpoint() {
        let config = Config {
            api_endpoint: "  ".to_string(),
            ..Default::default()
        };
        let error = validate_config(&config).unwrap_err();
        assert!(error.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let config = Config {
            api_endpoint: "ftp://example.com/scoreboard".to_string(),
            ..Default::default()
        };
        assert!(matches!(validate_config(&config), Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_durations_and_port() {
        let mut config = Config {
            fetch_interval_seconds: 0,
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());

        config.fetch_interval_seconds = 60;
        config.http_timeout_seconds = 0;
        assert!(validate_config(&config).is_err());

        config.http_timeout_seconds = 10;
        config.prom.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_empty_record_key() {
        let config = Config {
            record_key: String::new(),
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_log_path_parent_is_created() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("exporter.log");
        let config = Config {
            log_file_path: Some(log_path.to_string_lossy().to_string()),
            ..Default::default()
        };

        assert!(validate_config(&config).is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }

    #[test]
    fn test_rejects_empty_log_path() {
        let config = Config {
            log_file_path: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
