//! Domain primitives, ports and services.
//!
//! Purpose: define the weather cache vocabulary independent of HTTP and
//! persistence. Adapters in `inbound` and `outbound` depend on this module,
//! never the other way round.
//!
//! Public surface:
//! - CityName — trimmed, lower-cased cache key.
//! - WeatherObservation / WeatherRecord — provider output and stored record.
//! - Error / ErrorCode — client-facing error payload.
//! - TraceId — request-scoped correlation identifier.
//! - WeatherLookupService — cache-or-fetch implementation of the lookup port.

pub mod city;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod weather;
mod weather_lookup_service;

pub use self::city::{CITY_NAME_MIN_CHARS, CityName, CityNameValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::weather::{WeatherObservation, WeatherRecord};
pub use self::weather_lookup_service::WeatherLookupService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use weather_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("nothing here"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
