//! DTOs for decoding OpenWeather current-weather responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into a
//! domain [`WeatherObservation`] in one pass.

use serde::Deserialize;

use crate::domain::{CityName, WeatherObservation};

#[derive(Debug, Deserialize)]
pub(super) struct CurrentWeatherDto {
    pub(super) name: String,
    pub(super) main: MainDto,
    #[serde(default)]
    pub(super) weather: Vec<ConditionDto>,
    pub(super) wind: WindDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct MainDto {
    pub(super) temp: f64,
    pub(super) feels_like: f64,
    pub(super) humidity: f64,
    pub(super) pressure: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct ConditionDto {
    pub(super) description: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct WindDto {
    pub(super) speed: f64,
}

impl CurrentWeatherDto {
    /// Map the provider payload into an observation keyed by the provider's
    /// canonical city name.
    pub(super) fn into_observation(self) -> Result<WeatherObservation, String> {
        let city = CityName::new(&self.name)
            .map_err(|err| format!("unusable city name {:?}: {err}", self.name))?;
        let description = self
            .weather
            .into_iter()
            .next()
            .map(|condition| condition.description)
            .ok_or_else(|| "weather condition list is empty".to_owned())?;

        Ok(WeatherObservation {
            city,
            temperature: self.main.temp,
            description,
            feels_like: self.main.feels_like,
            humidity: self.main.humidity,
            pressure: self.main.pressure,
            wind_speed: self.wind.speed,
        })
    }
}
