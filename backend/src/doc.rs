//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the weather and health endpoints together with the
//! schema wrappers from the inbound layer. The document is served by Swagger
//! UI in debug builds and exported via `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, WeatherRecordSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weather backend API",
        description = "Current weather lookups cached from the OpenWeather API.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::weather::get_weather,
        crate::inbound::http::weather::get_cached_weather,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(WeatherRecordSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "weather", description = "Weather lookups and cache reads"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
