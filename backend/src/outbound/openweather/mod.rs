//! OpenWeather outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `WeatherSource`
//! port against the OpenWeather current-weather endpoint.

mod dto;
mod http_source;

pub use http_source::OpenWeatherHttpSource;
