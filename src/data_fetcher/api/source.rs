//! Where snapshots come from

use reqwest::Client;
use std::future::Future;

use super::fetch_utils::fetch_bytes;
use super::http_client::create_http_client_with_timeout;
use super::parser::parse_scoreboard;
use crate::config::Config;
use crate::data_fetcher::models::Snapshot;
use crate::error::AppError;

/// Produces a fresh [`Snapshot`] on demand.
///
/// The poll loop is generic over this so tests can drive it without a
/// network.
pub trait ScoreboardSource {
    fn fetch_snapshot(&self) -> impl Future<Output = Result<Snapshot, AppError>> + Send;
}

/// Fetches the scoreboard over HTTP from the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpScoreboardSource {
    client: Client,
    endpoint: String,
}

impl HttpScoreboardSource {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Builds a source with its own client using the configured timeout.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(client, config.api_endpoint.clone()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ScoreboardSource for HttpScoreboardSource {
    async fn fetch_snapshot(&self) -> Result<Snapshot, AppError> {
        let body = fetch_bytes(&self.client, &self.endpoint).await?;
        parse_scoreboard(&body)
    }
}
