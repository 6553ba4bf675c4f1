//! Raw HTTP fetching with status and transport error mapping

use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches the body at `url` with a single GET request.
///
/// Makes exactly one attempt; failures are returned to the caller as-is.
///
/// # Errors
/// * `AppError::NetworkTimeout` - the client timeout elapsed
/// * `AppError::NetworkConnection` - the connection could not be established
/// * `AppError::ApiNotFound` / `ApiClientError` / `ApiServerError` - non-2xx status
/// * `AppError::ApiFetch` - any other transport failure, including body reads
#[instrument(skip(client))]
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>, AppError> {
    info!("Fetching scoreboard from URL: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        map_transport_error(e, url)
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let body = response.bytes().await.map_err(|e| {
        error!("Failed to read response body from URL {}: {}", url, e);
        map_transport_error(e, url)
    })?;

    debug!("Response length: {} bytes", body.len());
    debug!("Response text (first 1024 chars): {}", preview(&body, 1024));

    Ok(body.to_vec())
}

fn map_transport_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

/// Lossy UTF-8 prefix of a body for log output.
fn preview(body: &[u8], max_chars: usize) -> String {
    String::from_utf8_lossy(body).chars().take(max_chars).collect()
}
