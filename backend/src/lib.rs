//! Weather lookup backend.
//!
//! Serves current weather for a city over HTTP, fetching it from the
//! OpenWeather API on first request and caching the result in PostgreSQL.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
