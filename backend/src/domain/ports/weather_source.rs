//! Driven port for the external weather provider.

use async_trait::async_trait;

use crate::domain::{CityName, WeatherObservation};

use super::define_port_error;

define_port_error! {
    /// Errors raised while fetching current weather from the provider.
    ///
    /// Every failure kind is distinct; adapters never retry.
    pub enum WeatherSourceError {
        /// Required provider settings (base URL, API key) are missing.
        Configuration { message: String } =>
            "weather provider is not configured: {message}",
        /// The provider reported that the city does not exist.
        CityNotFound => "city not found by external source",
        /// The provider answered with a non-success status.
        Upstream { status: u16, status_text: String } =>
            "external weather API error: {status} - {status_text}",
        /// The request was sent but no response arrived (network or timeout).
        Unavailable { message: String } =>
            "no response from external weather API: {message}",
        /// The request could not be built or sent.
        RequestSetup { message: String } =>
            "error setting up external weather API request: {message}",
        /// The provider answered successfully with an unusable body.
        MalformedResponse { message: String } =>
            "malformed response from external weather API: {message}",
    }
}

/// Port for fetching current conditions for a city.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch and normalise current weather for `city`.
    async fn fetch_current(&self, city: &CityName)
    -> Result<WeatherObservation, WeatherSourceError>;
}
