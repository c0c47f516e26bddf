//! Endpoint scenarios driven through the router without binding a port.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use numera_api::server::Server;

fn test_router() -> axum::Router {
    Server::builder().build().test_router()
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request");

    let response = test_router()
        .oneshot(request)
        .await
        .map_err(|err| match err {})
        .expect("route request");

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body).expect("parse JSON body");
    (status, json)
}

#[tokio::test]
async fn convert_returns_input_and_numeral() {
    let (status, body) = get("/romannumeral?query=42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"input": 42, "output": "XLII"}));
}

#[tokio::test]
async fn convert_handles_upper_boundary() {
    let (status, body) = get("/romannumeral?query=3999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], "MMMCMXCIX");
}

#[tokio::test]
async fn missing_query_is_rejected() {
    let (status, body) = get("/romannumeral").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required query parameter: query");
}

#[tokio::test]
async fn empty_query_is_treated_as_missing() {
    let (status, body) = get("/romannumeral?query=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("Missing required query parameter")
    );
}

#[tokio::test]
async fn out_of_range_query_is_rejected() {
    for query in ["4000", "0", "-5"] {
        let (status, body) = get(&format!("/romannumeral?query={query}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "query={query}");
        assert!(
            body["error"].as_str().unwrap().contains("Invalid input"),
            "query={query}"
        );
    }
}

#[tokio::test]
async fn non_numeric_query_is_rejected() {
    let (status, body) = get("/romannumeral?query=invalid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid input"));
}

#[tokio::test]
async fn leading_integer_parsing_is_tolerant() {
    let (status, body) = get("/romannumeral?query=42.75").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"input": 42, "output": "XLII"}));

    let (status, body) = get("/romannumeral?query=1984abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], "MCMLXXXIV");
}

#[tokio::test]
async fn unmatched_route_gets_normalized_404() {
    let (status, body) = get("/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"]["message"],
        "Resource not found: GET /nonexistent"
    );
    assert_eq!(body["error"]["statusCode"], 404);
    assert!(body["error"]["stack"].is_string());
}

#[tokio::test]
async fn test_error_route_raises_synthetic_500() {
    let (status, body) = get("/api/test-error").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], "Test error");
    assert_eq!(body["error"]["statusCode"], 500);
    assert!(body["error"]["stack"].is_string());
}

#[tokio::test]
async fn health_reports_ok_with_timestamp() {
    let (status, body) = get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    // ISO-8601 timestamp.
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn correlation_id_is_echoed() {
    let request = Request::builder()
        .uri("/romannumeral?query=9")
        .header("x-correlation-id", "corr-echo-1")
        .body(Body::empty())
        .expect("build request");

    let response = test_router()
        .oneshot(request)
        .await
        .map_err(|err| match err {})
        .expect("route request");

    assert_eq!(response.status(), StatusCode::OK);
    let echoed = response
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok());
    assert_eq!(echoed, Some("corr-echo-1"));
}

#[tokio::test]
async fn responses_are_json() {
    for uri in ["/romannumeral?query=7", "/nonexistent", "/api/test-error"] {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("build request");
        let response = test_router()
            .oneshot(request)
            .await
            .map_err(|err| match err {})
            .expect("route request");
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("application/json"), "uri={uri}");
    }
}
