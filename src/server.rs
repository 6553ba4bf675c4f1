//! Scrape endpoint serving the metrics registry.

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::constants::metrics::TEXT_CONTENT_TYPE;
use crate::error::AppError;
use crate::metrics::BowlMetrics;

/// Routes: `/metrics` for the exposition and `/healthz` for liveness.
pub fn router(metrics: BowlMetrics) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/healthz", get(liveness_handler))
        .with_state(metrics)
}

/// Binds `addr` and serves until the listener fails.
pub async fn serve_metrics(addr: SocketAddr, metrics: BowlMetrics) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        AppError::config_error(format!("Cannot bind metrics server to {addr}: {e}"))
    })?;
    serve_on(listener, metrics).await
}

/// Serves on an already bound listener.
pub async fn serve_on(listener: TcpListener, metrics: BowlMetrics) -> Result<(), AppError> {
    info!("Serving metrics on http://{}/metrics", listener.local_addr()?);
    axum::serve(listener, router(metrics)).await?;
    Ok(())
}

async fn metrics_handler(State(metrics): State<BowlMetrics>) -> Response {
    match metrics.render() {
        Ok(body) => ([(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            error!("Failed to encode metrics: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}
