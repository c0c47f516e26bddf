//! # numera-core
//!
//! Domain logic for the numera Roman-numeral service:
//!
//! - **Conversion**: pure integer-to-Roman-numeral mapping
//! - **Errors**: shared error type for configuration and startup
//! - **Observability**: structured logging initialization

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod observability;
pub mod roman;

pub use error::{Error, Result};
pub use roman::{MAX_ROMAN, MIN_ROMAN, to_roman};
