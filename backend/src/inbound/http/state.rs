//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::WeatherLookup;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use weather_backend::domain::WeatherLookupService;
/// use weather_backend::inbound::http::state::HttpState;
/// use weather_backend::outbound::memory::InMemoryWeatherStore;
/// use weather_backend::outbound::openweather::OpenWeatherHttpSource;
///
/// let store = Arc::new(InMemoryWeatherStore::new(Arc::new(mockable::DefaultClock)));
/// let source = Arc::new(
///     OpenWeatherHttpSource::new(
///         "https://api.openweathermap.org/data/2.5/weather".parse().expect("url"),
///         "key",
///         std::time::Duration::from_secs(10),
///     )
///     .expect("client"),
/// );
/// let state = HttpState::new(Arc::new(WeatherLookupService::new(store, source)));
/// let _weather = state.weather.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub weather: Arc<dyn WeatherLookup>,
}

impl HttpState {
    /// Construct state from the weather lookup port.
    pub fn new(weather: Arc<dyn WeatherLookup>) -> Self {
        Self { weather }
    }
}
