//! Roman-numeral conversion route.
//!
//! ## Routes
//!
//! - `GET /romannumeral?query={integer}` - Convert an integer (1-3999)

use std::sync::Arc;

use axum::extract::Query;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use numera_core::{MAX_ROMAN, MIN_ROMAN, to_roman};

use crate::error::{ApiError, ApiResult, ValidationErrorBody};
use crate::server::AppState;

/// Query parameters for the conversion endpoint.
#[derive(Debug, Deserialize)]
pub struct ConvertParams {
    /// Raw query value; validated here before it reaches the converter.
    pub query: Option<String>,
}

/// Successful conversion response.
#[derive(Debug, Serialize, ToSchema)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ConversionResponse {
    /// The parsed input integer.
    pub input: u16,
    /// Its Roman-numeral representation.
    pub output: String,
}

/// Creates conversion routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/romannumeral", get(convert))
}

/// Convert an integer to a Roman numeral.
///
/// GET /romannumeral?query={integer}
#[utoipa::path(
    get,
    path = "/romannumeral",
    tag = "roman",
    params(
        ("query" = Option<String>, Query, description = "Integer between 1 and 3999"),
    ),
    responses(
        (status = 200, description = "Conversion result", body = ConversionResponse),
        (status = 400, description = "Missing or out-of-range query", body = ValidationErrorBody),
    )
)]
pub(crate) async fn convert(
    Query(params): Query<ConvertParams>,
) -> ApiResult<impl IntoResponse> {
    let raw = params
        .query
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::missing_parameter("query"))?;

    let input = validate(&raw)?;
    let output = to_roman(input);

    tracing::debug!(input, output, "Converted integer to Roman numeral");

    Ok(Json(ConversionResponse { input, output }))
}

/// Parses and bounds-checks a raw query value.
fn validate(raw: &str) -> ApiResult<u16> {
    let parsed = parse_leading_integer(raw).ok_or_else(ApiError::invalid_range)?;
    if parsed < i64::from(MIN_ROMAN) || parsed > i64::from(MAX_ROMAN) {
        return Err(ApiError::invalid_range());
    }
    // Range check above keeps the cast in u16 territory.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(parsed as u16)
}

/// Parses the leading base-10 integer of `raw`, tolerating trailing
/// non-numeric content (`"42.75"` → 42, `"1984abc"` → 1984).
///
/// Leading whitespace and an optional sign are accepted; a value with
/// no leading digits parses to nothing. Magnitudes beyond `i64` clamp,
/// which the range check rejects anyway.
fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let mut value: i64 = 0;
    for c in digits.chars() {
        let digit = i64::from(c as u8 - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_integer_tolerates_trailing_content() {
        assert_eq!(parse_leading_integer("42.75"), Some(42));
        assert_eq!(parse_leading_integer("1984abc"), Some(1984));
        assert_eq!(parse_leading_integer("3.999"), Some(3));
    }

    #[test]
    fn leading_integer_accepts_whitespace_and_sign() {
        assert_eq!(parse_leading_integer("  7"), Some(7));
        assert_eq!(parse_leading_integer("+12"), Some(12));
        assert_eq!(parse_leading_integer("-5"), Some(-5));
    }

    #[test]
    fn leading_integer_rejects_non_numeric() {
        assert_eq!(parse_leading_integer("abc"), None);
        assert_eq!(parse_leading_integer(""), None);
        assert_eq!(parse_leading_integer(".5"), None);
        assert_eq!(parse_leading_integer("-"), None);
    }

    #[test]
    fn leading_integer_clamps_huge_values() {
        let huge = "9".repeat(30);
        assert_eq!(parse_leading_integer(&huge), Some(i64::MAX));
    }

    #[test]
    fn validate_enforces_bounds() {
        assert_eq!(validate("1").unwrap(), 1);
        assert_eq!(validate("3999").unwrap(), 3999);
        assert!(validate("0").is_err());
        assert!(validate("-5").is_err());
        assert!(validate("4000").is_err());
        assert!(validate("not-a-number").is_err());
    }
}
