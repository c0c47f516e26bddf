//! Request logging middleware.
//!
//! Observes every request/response pair and emits one record with a
//! severity derived from the final status:
//!
//! - `>= 500` → error
//! - `400..=499` → warn
//! - `300..=399` → silent
//! - otherwise → info
//!
//! Health and status probes are suppressed entirely, and sensitive
//! headers are censored before anything reaches the sink.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::context::{REQUEST_ID_HEADER, RequestContext};
use crate::redaction::RedactedHeaders;

/// Middleware that logs each request/response pair.
pub async fn request_log_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let ctx = RequestContext::from_headers(request.headers());
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.to_string());
    let suppress = is_probe_path(&path);

    if !suppress {
        tracing::debug!(
            method = %method,
            path = %path,
            headers = ?RedactedHeaders(request.headers()),
            "Inbound request"
        );
    }

    let mut response = next.run(request).await;

    // Echo the correlation id so clients can match responses to traces.
    if let Some(correlation_id) = ctx.correlation_id.as_deref() {
        if let Ok(value) = HeaderValue::from_str(correlation_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
    }

    if !suppress {
        let status = response.status().as_u16();
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        let correlation = ctx.correlation_id.as_deref();
        let user = ctx.user_id.as_str();
        let client = client.as_deref();

        if status >= 500 {
            tracing::error!(
                method = %method, path = %path, status, latency_ms,
                correlation, user, client, "request completed"
            );
        } else if status >= 400 {
            tracing::warn!(
                method = %method, path = %path, status, latency_ms,
                correlation, user, client, "request completed"
            );
        } else if status < 300 {
            tracing::info!(
                method = %method, path = %path, status, latency_ms,
                correlation, user, client, "request completed"
            );
        }
        // 3xx responses are deliberately silent.
    }

    response
}

/// Returns true for health- or status-probe paths, which are excluded
/// from automatic request logging.
pub(crate) fn is_probe_path(path: &str) -> bool {
    path.contains("/health") || path.contains("/status")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_paths_are_suppressed() {
        assert!(is_probe_path("/api/health"));
        assert!(is_probe_path("/internal/status"));
        assert!(!is_probe_path("/romannumeral"));
        assert!(!is_probe_path("/"));
    }
}
