//! # numera-cli
//!
//! Command-line client for the numera Roman-numeral service.
//!
//! ## Commands
//!
//! - `numera convert <NUMBER>` - Convert an integer to a Roman numeral
//! - `numera health` - Check service health
//!
//! ## Configuration
//!
//! The CLI uses environment variables or command-line flags:
//!
//! - `NUMERA_API_URL` - API endpoint (default: `http://localhost:8080`)

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]
// CLI uses print! macros intentionally
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

pub mod client;
pub mod commands;

use clap::{Parser, Subcommand};

/// numera CLI - Roman-numeral conversion client.
#[derive(Debug, Parser)]
#[command(name = "numera")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API server URL.
    #[arg(long, env = "NUMERA_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the effective configuration.
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            api_url: self.api_url.clone(),
            format: self.format,
        }
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert an integer to a Roman numeral.
    Convert(commands::convert::ConvertArgs),
    /// Check service health.
    Health,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API server URL.
    pub api_url: String,
    /// Output format.
    pub format: OutputFormat,
}
