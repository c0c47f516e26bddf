//! Health and diagnostic routes.
//!
//! ## Routes
//!
//! - `GET /api/health` - Liveness check (excluded from request logging)
//! - `GET /api/test-error` - Always raises a synthetic 500 (diagnostic only)

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ApiError, ApiResult};
use crate::server::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Current server time, ISO-8601.
    pub timestamp: String,
}

/// Creates health and diagnostic routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/test-error", get(test_error))
}

/// Health check endpoint handler.
///
/// Shallow liveness check; there are no dependencies to verify.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse),
    )
)]
pub(crate) async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Diagnostic endpoint that exercises the error normalization path.
pub(crate) async fn test_error(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let err = ApiError::transport(StatusCode::INTERNAL_SERVER_ERROR, "Test error");
    Err(if state.config.debug {
        err
    } else {
        err.without_stack()
    })
}
