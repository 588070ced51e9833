//! Driving port for weather lookups.
//!
//! Inbound adapters call this port with raw request input. Implementations
//! own validation, so adapters never build a [`CityName`] themselves.
//!
//! [`CityName`]: crate::domain::CityName

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{CityName, CityNameValidationError, WeatherRecord};

use super::{WeatherSourceError, WeatherStoreError};

/// Raw lookup input as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherLookupRequest {
    pub city: Option<String>,
}

impl WeatherLookupRequest {
    /// Build a request for the given raw city value.
    pub fn for_city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
        }
    }
}

/// Whether a lookup was served from the store or freshly fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// An existing record was returned.
    Hit,
    /// The record was fetched and written by this lookup.
    Miss,
}

/// Successful cache-or-fetch result.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupOutcome {
    pub record: WeatherRecord,
    pub cache: CacheStatus,
}

/// Errors surfaced by [`WeatherLookup`] operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeatherLookupError {
    /// The raw city input failed validation.
    #[error(transparent)]
    Validation(#[from] CityNameValidationError),
    /// No cached record exists and the operation does not fetch.
    #[error("weather for city '{city}' is not cached")]
    NotCached { city: CityName },
    /// The provider does not know the city.
    #[error("city '{city}' not found by external source")]
    CityNotFound { city: CityName },
    /// Provider settings are missing.
    #[error("weather provider is not configured: {message}")]
    Configuration { message: String },
    /// The provider answered with a non-success status.
    #[error("external weather API error: {status} - {status_text}")]
    Upstream { status: u16, status_text: String },
    /// The provider could not be reached.
    #[error("no response from external weather API: {message}")]
    UpstreamUnavailable { message: String },
    /// The provider request could not be prepared.
    #[error("error setting up external weather API request: {message}")]
    RequestSetup { message: String },
    /// The provider answered with an unusable body.
    #[error("malformed response from external weather API: {message}")]
    MalformedResponse { message: String },
    /// The weather store failed.
    #[error(transparent)]
    Store(#[from] WeatherStoreError),
}

impl WeatherLookupError {
    /// Map a provider failure for `city` into the lookup vocabulary.
    pub fn from_source(city: &CityName, error: WeatherSourceError) -> Self {
        match error {
            WeatherSourceError::Configuration { message } => Self::Configuration { message },
            WeatherSourceError::CityNotFound => Self::CityNotFound { city: city.clone() },
            WeatherSourceError::Upstream {
                status,
                status_text,
            } => Self::Upstream {
                status,
                status_text,
            },
            WeatherSourceError::Unavailable { message } => Self::UpstreamUnavailable { message },
            WeatherSourceError::RequestSetup { message } => Self::RequestSetup { message },
            WeatherSourceError::MalformedResponse { message } => {
                Self::MalformedResponse { message }
            }
        }
    }
}

/// Port for cache-or-fetch and cache-only weather lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    /// Return the cached record for the requested city, fetching and storing
    /// it first when absent.
    async fn get_or_fetch(
        &self,
        request: WeatherLookupRequest,
    ) -> Result<LookupOutcome, WeatherLookupError>;

    /// Return the cached record for the requested city without contacting
    /// the provider.
    async fn get_cached_only(
        &self,
        request: WeatherLookupRequest,
    ) -> Result<WeatherRecord, WeatherLookupError>;
}
