//! # numera-api
//!
//! HTTP surface for the numera Roman-numeral service:
//!
//! - **Routing**: conversion, health, and diagnostic endpoints
//! - **Validation**: query parsing and bounds checks at the boundary
//! - **Errors**: a single normalized response shape for every failure
//! - **Observability**: per-request logging with redaction
//!
//! ## Endpoints
//!
//! ```text
//! GET /                 - Form client (single page)
//! GET /romannumeral     - Convert ?query=<integer> to a Roman numeral
//! GET /api/health       - Health check (not request-logged)
//! GET /api/test-error   - Synthetic 500 (diagnostic only)
//! GET /openapi.json     - OpenAPI document
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod context;
pub mod error;
pub mod openapi;
pub(crate) mod redaction;
pub mod request_log;
pub mod routes;
pub mod server;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::context::RequestContext;
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::server::Server;
}
