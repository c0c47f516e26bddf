//! Log redaction helpers.
//!
//! Credentials arrive in headers (and occasionally in request bodies)
//! and MUST NOT reach the log sink in clear text.

use axum::http::HeaderMap;

/// Replacement value for redacted fields.
pub const CENSOR: &str = "*** REDACTED ***";

/// Returns true for header names that must never be logged verbatim.
pub fn is_sensitive_header(name: &str) -> bool {
    let normalized = name.to_ascii_lowercase();
    matches!(normalized.as_str(), "authorization" | "cookie" | "set-cookie")
}

/// Returns true for body field names that must never be logged verbatim.
#[allow(dead_code)]
pub fn is_sensitive_field(name: &str) -> bool {
    name.eq_ignore_ascii_case("password")
}

/// Returns a JSON value with sensitive top-level fields censored.
///
/// Intended for log output only; the original body is untouched.
#[allow(dead_code)]
#[must_use]
pub fn redact_body(body: &serde_json::Value) -> serde_json::Value {
    let Some(object) = body.as_object() else {
        return body.clone();
    };

    let mut redacted = object.clone();
    for (key, value) in &mut redacted {
        if is_sensitive_field(key) {
            *value = serde_json::Value::String(CENSOR.to_string());
        }
    }
    serde_json::Value::Object(redacted)
}

/// A header-map wrapper that censors sensitive values in `Debug`.
pub struct RedactedHeaders<'a>(pub &'a HeaderMap);

impl std::fmt::Debug for RedactedHeaders<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in self.0 {
            if is_sensitive_header(name.as_str()) {
                map.entry(&name.as_str(), &CENSOR);
            } else {
                map.entry(&name.as_str(), &value.to_str().unwrap_or("<binary>"));
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_and_cookie_are_sensitive() {
        assert!(is_sensitive_header("authorization"));
        assert!(is_sensitive_header("Authorization"));
        assert!(is_sensitive_header("cookie"));
        assert!(!is_sensitive_header("x-user-id"));
    }

    #[test]
    fn redacted_headers_censor_values() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer secret".parse().unwrap());
        headers.insert("accept", "application/json".parse().unwrap());

        let rendered = format!("{:?}", RedactedHeaders(&headers));
        assert!(rendered.contains(CENSOR));
        assert!(!rendered.contains("Bearer secret"));
        assert!(rendered.contains("application/json"));
    }

    #[test]
    fn redact_body_censors_password_only() {
        let body = serde_json::json!({"password": "hunter2", "name": "ada"});
        let redacted = redact_body(&body);
        assert_eq!(redacted["password"], CENSOR);
        assert_eq!(redacted["name"], "ada");
    }

    #[test]
    fn redact_body_passes_non_objects_through() {
        let body = serde_json::json!([1, 2, 3]);
        assert_eq!(redact_body(&body), body);
    }
}
