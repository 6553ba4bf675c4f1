use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch scoreboard: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse scoreboard response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("Scoreboard endpoint not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("Scoreboard server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Scoreboard client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching scoreboard from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("Scoreboard returned malformed JSON: {message}")]
    ApiMalformedJson { message: String },

    #[error("Scoreboard returned empty or missing data: {message}")]
    ApiNoData { message: String },

    #[error("Invalid kickoff time '{value}': {message}")]
    TimeFormat { value: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Metrics registry error: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a kickoff time format error
    pub fn time_format(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TimeFormat {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
        }
    }

    /// Transport-level failures: the request never produced a usable body.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiNotFound { .. }
                | AppError::ApiClientError { .. }
                | AppError::ApiServerError { .. }
        )
    }

    /// Decode failures: a body arrived but is not a scoreboard.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            AppError::ApiParse(_) | AppError::ApiMalformedJson { .. } | AppError::ApiNoData { .. }
        )
    }

    /// Short cause reported when the exporter stops.
    pub fn category(&self) -> &'static str {
        if self.is_transport() {
            "scoreboard unreachable"
        } else if self.is_decode() {
            "scoreboard response unusable"
        } else {
            match self {
                AppError::Config(_) | AppError::TomlDeserialize(_) => "configuration",
                AppError::Metrics(_) => "metrics registry",
                AppError::LogSetup(_) => "logging setup",
                _ => "internal",
            }
        }
    }
}
