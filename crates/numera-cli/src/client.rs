//! HTTP client for the numera API.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::Config;

/// A successful conversion.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversionResponse {
    /// The parsed input integer.
    pub input: u16,
    /// Its Roman-numeral representation.
    pub output: String,
}

/// Health check payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Server time, ISO-8601.
    pub timestamp: String,
}

/// API client for the numera conversion endpoints.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a new API client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    /// Converts an integer to a Roman numeral.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server rejects the
    /// input, or the response cannot be parsed.
    pub async fn convert(&self, number: u16) -> Result<ConversionResponse> {
        let url = format!("{}/romannumeral?query={number}", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request")?;

        if response.status().is_success() {
            response.json().await.context("Failed to parse response")
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body).unwrap_or(body);
            anyhow::bail!("API error ({status}): {message}")
        }
    }

    /// Checks service health.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/api/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request")?;

        if response.status().is_success() {
            response.json().await.context("Failed to parse response")
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({status}): {body}")
        }
    }
}

/// Extracts the human-readable message from an API error body.
///
/// Validation failures use a flat `{"error": "..."}` shape; everything
/// else nests it as `{"error": {"message": "..."}}`.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match &value["error"] {
        serde_json::Value::String(message) => Some(message.clone()),
        nested => nested["message"].as_str().map(str::to_string),
    }
}
