//! Logging middleware
//!
//! This module provides request logging for the HTTP API: method, path,
//! status, duration and request id for every request, plus a warning for
//! slow requests.

use std::time::Instant;
use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{info, warn};
use super::request_id::RequestId;

/// Requests slower than this are logged as warnings
const SLOW_REQUEST_MS: u128 = 1000;

/// Log request and response details
pub async fn log_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = duration_ms as u64,
        "Request completed"
    );

    if duration_ms > SLOW_REQUEST_MS {
        warn!(
            request_id = %request_id,
            path = %path,
            duration_ms = duration_ms as u64,
            "Slow request detected"
        );
    }

    response
}
