//! API error types and HTTP response mapping.
//!
//! Every failure is an explicit [`ApiError`] variant carrying exactly
//! the fields it needs; the [`IntoResponse`] impl is the single total
//! mapping from variant to client-visible JSON, and emits one log
//! record per handled error with severity derived from the status.

use std::backtrace::Backtrace;

use axum::Json;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// API result type.
pub type ApiResult<T> = Result<T, ApiError>;

/// Flat error body used for request-validation failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    /// Human-readable message.
    pub error: String,
}

/// Nested error body used for everything past validation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Error detail.
    pub error: ErrorDetail,
}

/// Detail payload of [`ErrorBody`].
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    /// Human-readable message.
    pub message: String,
    /// HTTP status code, always present (500 when the source carried none).
    pub status_code: u16,
    /// Application-specific error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Additional error context.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<serde_json::Value>,
    /// Captured stack trace. Present only in debug deployments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Error taxonomy for the numera API.
#[derive(Debug)]
pub enum ApiErrorKind {
    /// The required query parameter was absent or empty.
    MissingParameter {
        /// Parameter name.
        name: &'static str,
    },
    /// The query value did not parse to an integer in `1..=3999`.
    InvalidRange,
    /// No route matched the request.
    NotFound {
        /// Request method.
        method: Method,
        /// Request path.
        path: String,
    },
    /// A transport-level error carrying only a status and message.
    Transport {
        /// HTTP status carried by the originating error.
        status: StatusCode,
        /// Human-readable message.
        message: String,
    },
    /// An application error carrying status, code, and data.
    Application {
        /// HTTP status (500 when the source supplied none).
        status: StatusCode,
        /// Application-specific error code.
        code: Option<String>,
        /// Additional error context.
        data: Option<serde_json::Value>,
        /// Human-readable message.
        message: String,
    },
    /// An unclassified fault.
    Internal {
        /// Human-readable message.
        message: String,
    },
}

/// An API error plus the stack captured at construction.
#[derive(Debug)]
pub struct ApiError {
    kind: ApiErrorKind,
    stack: Option<String>,
}

impl ApiError {
    /// The required query parameter was absent.
    #[must_use]
    pub fn missing_parameter(name: &'static str) -> Self {
        // Validation failures are reported before any handler logic runs;
        // they carry no stack.
        Self {
            kind: ApiErrorKind::MissingParameter { name },
            stack: None,
        }
    }

    /// The query value was out of range or unparsable.
    #[must_use]
    pub fn invalid_range() -> Self {
        Self {
            kind: ApiErrorKind::InvalidRange,
            stack: None,
        }
    }

    /// No route matched the request.
    #[must_use]
    pub fn not_found(method: Method, path: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::NotFound {
                method,
                path: path.into(),
            },
            stack: capture_stack(),
        }
    }

    /// A transport-level error (status and message only).
    pub fn transport(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Transport {
                status,
                message: message.into(),
            },
            stack: capture_stack(),
        }
    }

    /// An application error with optional code and data.
    pub fn application(
        status: Option<StatusCode>,
        code: Option<String>,
        data: Option<serde_json::Value>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: ApiErrorKind::Application {
                status: status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                code,
                data,
                message: message.into(),
            },
            stack: capture_stack(),
        }
    }

    /// An unclassified internal fault.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Internal {
                message: message.into(),
            },
            stack: capture_stack(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match &self.kind {
            ApiErrorKind::MissingParameter { .. } | ApiErrorKind::InvalidRange => {
                StatusCode::BAD_REQUEST
            }
            ApiErrorKind::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiErrorKind::Transport { status, .. }
            | ApiErrorKind::Application { status, .. } => *status,
            ApiErrorKind::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the human-readable error message.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.kind {
            ApiErrorKind::MissingParameter { name } => {
                format!("Missing required query parameter: {name}")
            }
            ApiErrorKind::InvalidRange => {
                "Invalid input. Please provide a positive integer between 1 and 3999.".to_string()
            }
            ApiErrorKind::NotFound { method, path } => {
                format!("Resource not found: {method} {path}")
            }
            ApiErrorKind::Transport { message, .. }
            | ApiErrorKind::Application { message, .. }
            | ApiErrorKind::Internal { message } => message.clone(),
        }
    }

    /// Returns the error taxonomy variant.
    #[must_use]
    pub fn kind(&self) -> &ApiErrorKind {
        &self.kind
    }

    /// Strips the captured stack (non-debug deployments).
    #[must_use]
    pub fn without_stack(mut self) -> Self {
        self.stack = None;
        self
    }

    fn log(&self) {
        let status = self.status().as_u16();
        let message = self.message();
        if status >= 500 {
            tracing::error!(status, message, "Server error occurred");
        } else if status >= 400 {
            tracing::warn!(status, message, "Client error occurred");
        } else {
            tracing::info!(status, message, "Non-error status code");
        }
    }
}

fn capture_stack() -> Option<String> {
    Some(Backtrace::force_capture().to_string())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status();
        let message = self.message();
        match self.kind {
            // Validation rejections keep the flat historical shape.
            ApiErrorKind::MissingParameter { .. } | ApiErrorKind::InvalidRange => {
                (status, Json(ValidationErrorBody { error: message })).into_response()
            }
            ApiErrorKind::NotFound { .. }
            | ApiErrorKind::Transport { .. }
            | ApiErrorKind::Internal { .. } => {
                nested_response(status, message, None, None, self.stack)
            }
            ApiErrorKind::Application { code, data, .. } => {
                nested_response(status, message, code, data, self.stack)
            }
        }
    }
}

fn nested_response(
    status: StatusCode,
    message: String,
    code: Option<String>,
    data: Option<serde_json::Value>,
    stack: Option<String>,
) -> Response {
    (
        status,
        Json(ErrorBody {
            error: ErrorDetail {
                message,
                status_code: status.as_u16(),
                code,
                data,
                stack,
            },
        }),
    )
        .into_response()
}
