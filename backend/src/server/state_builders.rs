//! Builders wiring outbound adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::warn;

use weather_backend::domain::WeatherLookupService;
use weather_backend::domain::ports::{WeatherLookup, WeatherSource};
use weather_backend::inbound::http::state::HttpState;
use weather_backend::outbound::memory::InMemoryWeatherStore;
use weather_backend::outbound::openweather::OpenWeatherHttpSource;
use weather_backend::outbound::persistence::DieselWeatherStore;

use super::ServerConfig;

fn build_source(config: &ServerConfig) -> std::io::Result<Arc<OpenWeatherHttpSource>> {
    let settings = &config.openweather;
    OpenWeatherHttpSource::new(
        settings.base_url.clone(),
        settings.api_key.clone(),
        settings.timeout,
    )
    .map(Arc::new)
    .map_err(|err| std::io::Error::other(format!("failed to build OpenWeather client: {err}")))
}

fn build_lookup<F>(config: &ServerConfig, source: Arc<F>) -> Arc<dyn WeatherLookup>
where
    F: WeatherSource + 'static,
{
    match &config.db_pool {
        Some(pool) => Arc::new(WeatherLookupService::new(
            Arc::new(DieselWeatherStore::new(pool.clone())),
            source,
        )),
        None => {
            warn!("no database pool configured; weather cache is process-local");
            Arc::new(WeatherLookupService::new(
                Arc::new(InMemoryWeatherStore::new(Arc::new(DefaultClock))),
                source,
            ))
        }
    }
}

/// Build the shared HTTP state from server configuration.
///
/// # Errors
/// Returns [`std::io::Error`] when the provider HTTP client cannot be built.
pub(crate) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let source = build_source(config)?;
    Ok(web::Data::new(HttpState::new(build_lookup(config, source))))
}
