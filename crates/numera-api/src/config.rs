//! Server configuration.
//!
//! All settings come from environment variables. The spec-level surface
//! is a single `PORT` variable; the rest carry teacher-style defaults
//! suitable for local development.

use serde::{Deserialize, Serialize};

use numera_core::{Error, Result};

/// CORS configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// Allowed origins. `["*"]` permits any origin.
    pub allowed_origins: Vec<String>,
    /// Preflight cache duration in seconds.
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            max_age_seconds: 3600,
        }
    }
}

/// Configuration for the numera API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server port.
    pub http_port: u16,

    /// Enable debug mode.
    ///
    /// Debug mode selects pretty log output and includes stack traces
    /// in error response bodies. Disable for public-facing deployments.
    pub debug: bool,

    /// CORS settings.
    pub cors: CorsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 8080,
            debug: true,
            cors: CorsConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: HTTP listen port (default 8080)
    /// - `NUMERA_DEBUG`: debug mode (default true)
    /// - `NUMERA_CORS_ALLOWED_ORIGINS`: comma-separated origins (default `*`)
    /// - `NUMERA_CORS_MAX_AGE_SECONDS`: preflight cache duration
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but unparsable.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(port) = env_u16("PORT")? {
            config.http_port = port;
        }
        if let Some(debug) = env_bool("NUMERA_DEBUG")? {
            config.debug = debug;
        }
        if let Some(origins) = env_string("NUMERA_CORS_ALLOWED_ORIGINS") {
            config.cors.allowed_origins = parse_cors_allowed_origins(&origins);
        }
        if let Some(max_age) = env_u64("NUMERA_CORS_MAX_AGE_SECONDS")? {
            config.cors.max_age_seconds = max_age;
        }

        Ok(config)
    }
}

fn parse_cors_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_u16(name: &str) -> Result<Option<u16>> {
    env_string(name)
        .map(|value| {
            value
                .parse::<u16>()
                .map_err(|_| Error::InvalidInput(format!("{name} must be a u16, got {value:?}")))
        })
        .transpose()
}

fn env_u64(name: &str) -> Result<Option<u64>> {
    env_string(name)
        .map(|value| {
            value
                .parse::<u64>()
                .map_err(|_| Error::InvalidInput(format!("{name} must be a u64, got {value:?}")))
        })
        .transpose()
}

fn env_bool(name: &str) -> Result<Option<bool>> {
    env_string(name)
        .map(|value| parse_bool(name, &value))
        .transpose()
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(Error::InvalidInput(format!(
            "{name} must be true/false, got {other:?}"
        ))),
    }
}
