//! OpenAPI document for the numera API.

use utoipa::OpenApi;

use crate::error::{ErrorBody, ErrorDetail, ValidationErrorBody};
use crate::routes::health::HealthResponse;
use crate::routes::roman::ConversionResponse;

/// OpenAPI documentation root.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::roman::convert,
        crate::routes::health::health,
    ),
    components(schemas(
        ConversionResponse,
        HealthResponse,
        ValidationErrorBody,
        ErrorBody,
        ErrorDetail,
    )),
    tags(
        (name = "roman", description = "Integer to Roman-numeral conversion"),
        (name = "health", description = "Liveness probes"),
    ),
    info(
        title = "numera API",
        description = "Converts positive integers (1-3999) to Roman numerals",
    )
)]
pub struct ApiDoc;
