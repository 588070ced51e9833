//! Weather records and the provider observations they are built from.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::CityName;

/// Current conditions for a city as reported by the external provider.
///
/// This is the record shape before persistence: the store assigns the
/// identifier and timestamps when it creates a [`WeatherRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub city: CityName,
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Description of the first reported weather condition.
    pub description: String,
    /// Perceived temperature in degrees Celsius.
    pub feels_like: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Atmospheric pressure in hPa.
    pub pressure: f64,
    /// Wind speed in metres per second.
    pub wind_speed: f64,
}

/// Persisted weather snapshot for one normalised city.
///
/// Records are immutable once created; at most one exists per city.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub id: Uuid,
    pub city: CityName,
    pub temperature: f64,
    pub description: String,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WeatherRecord {
    /// Build a record from an observation with store-assigned metadata.
    pub fn from_observation(
        id: Uuid,
        observation: WeatherObservation,
        created_at: DateTime<Utc>,
    ) -> Self {
        let WeatherObservation {
            city,
            temperature,
            description,
            feels_like,
            humidity,
            pressure,
            wind_speed,
        } = observation;
        Self {
            id,
            city,
            temperature,
            description,
            feels_like,
            humidity,
            pressure,
            wind_speed,
            created_at,
            updated_at: created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn record_serialises_with_camel_case_fields() {
        let created_at = Utc
            .with_ymd_and_hms(2026, 10, 18, 9, 0, 0)
            .single()
            .expect("valid timestamp");
        let record = WeatherRecord::from_observation(
            Uuid::nil(),
            WeatherObservation {
                city: CityName::new("London").expect("valid city"),
                temperature: 15.0,
                description: "clear sky".to_owned(),
                feels_like: 14.0,
                humidity: 60.0,
                pressure: 1012.0,
                wind_speed: 3.5,
            },
            created_at,
        );

        let value = serde_json::to_value(&record).expect("serialise record");
        assert_eq!(value["city"], json!("london"));
        assert_eq!(value["feelsLike"], json!(14.0));
        assert_eq!(value["windSpeed"], json!(3.5));
        assert_eq!(value["createdAt"], json!("2026-10-18T09:00:00Z"));
        assert_eq!(value["createdAt"], value["updatedAt"]);
    }
}
