//! Health command - check service liveness.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::{Config, OutputFormat};

/// Execute the health command.
///
/// # Errors
///
/// Returns an error if the service is unreachable or unhealthy.
pub async fn execute(config: &Config) -> Result<()> {
    let client = ApiClient::new(config)?;
    let response = client.health().await?;

    match config.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!(
                "{} (as of {})",
                response.status.green(),
                response.timestamp
            );
        }
    }

    Ok(())
}
