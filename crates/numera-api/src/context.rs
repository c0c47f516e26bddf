//! Per-request correlation context.
//!
//! Correlation ids are client-supplied and never generated here: an
//! absent header stays absent in the logs. The user id falls back to
//! the literal `anonymous`.

use axum::http::{HeaderMap, HeaderValue};

/// Header carrying an explicit correlation id.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Header carrying an upstream request id, used as a correlation fallback.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Header carrying the caller's user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Correlation metadata derived from request headers.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlation id, when the caller supplied one.
    pub correlation_id: Option<String>,
    /// User id, `"anonymous"` when absent.
    pub user_id: String,
}

impl RequestContext {
    /// Extracts correlation metadata from request headers.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let correlation_id = header_string(headers, CORRELATION_ID_HEADER)
            .or_else(|| header_string(headers, REQUEST_ID_HEADER));
        let user_id =
            header_string(headers, USER_ID_HEADER).unwrap_or_else(|| "anonymous".to_string());

        Self {
            correlation_id,
            user_id,
        }
    }
}

pub(crate) fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(header_value_to_string)
}

fn header_value_to_string(value: &HeaderValue) -> Option<String> {
    value.to_str().ok().map(str::to_string)
}
