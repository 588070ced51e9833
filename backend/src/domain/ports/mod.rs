//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod weather_lookup;
mod weather_source;
mod weather_store;

#[cfg(test)]
pub use weather_lookup::MockWeatherLookup;
pub use weather_lookup::{
    CacheStatus, LookupOutcome, WeatherLookup, WeatherLookupError, WeatherLookupRequest,
};
#[cfg(test)]
pub use weather_source::MockWeatherSource;
pub use weather_source::{WeatherSource, WeatherSourceError};
#[cfg(test)]
pub use weather_store::MockWeatherStore;
pub use weather_store::{CreateOutcome, WeatherStore, WeatherStoreError};
