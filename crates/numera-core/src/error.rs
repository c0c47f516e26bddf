//! Shared error type for configuration and startup failures.

/// Result alias using the shared [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the HTTP request path.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value could not be parsed or validated.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An internal failure (bind error, server error).
    #[error("internal error: {message}")]
    Internal {
        /// Human readable message.
        message: String,
    },
}
