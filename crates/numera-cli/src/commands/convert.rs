//! Convert command - integer to Roman numeral.

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::{Config, OutputFormat};

/// Arguments for the convert command.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// The integer to convert (1-3999).
    #[arg(value_parser = clap::value_parser!(u16).range(1..=3999))]
    pub number: u16,
}

/// Execute the convert command.
///
/// # Errors
///
/// Returns an error if the API request fails or the input is rejected.
pub async fn execute(args: ConvertArgs, config: &Config) -> Result<()> {
    let client = ApiClient::new(config)?;
    let response = client.convert(args.number).await?;

    match config.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("{} = {}", response.input, response.output.bold());
        }
    }

    Ok(())
}
