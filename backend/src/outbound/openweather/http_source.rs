//! Reqwest-backed OpenWeather source adapter.
//!
//! This adapter owns transport details only: query parameters, timeout and
//! HTTP error mapping, and JSON decoding into domain observations. It never
//! retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::warn;

use super::dto::CurrentWeatherDto;
use crate::domain::ports::{WeatherSource, WeatherSourceError};
use crate::domain::{CityName, WeatherObservation};

const UNITS: &str = "metric";

/// OpenWeather source adapter issuing `GET` requests against one endpoint.
pub struct OpenWeatherHttpSource {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl OpenWeatherHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherHttpSource {
    async fn fetch_current(
        &self,
        city: &CityName,
    ) -> Result<WeatherObservation, WeatherSourceError> {
        let api_key = self.api_key.trim();
        if api_key.is_empty() {
            return Err(WeatherSourceError::configuration(
                "OpenWeather API key is not configured",
            ));
        }

        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[("q", city.as_str()), ("appid", api_key), ("units", UNITS)])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            warn!(
                city = %city,
                status = status.as_u16(),
                body = %body_preview(body.as_ref()),
                "OpenWeather request failed"
            );
            return Err(map_status_error(status));
        }

        parse_observation(body.as_ref())
    }
}

fn parse_observation(body: &[u8]) -> Result<WeatherObservation, WeatherSourceError> {
    let decoded: CurrentWeatherDto = serde_json::from_slice(body).map_err(|error| {
        WeatherSourceError::malformed_response(format!("invalid OpenWeather JSON payload: {error}"))
    })?;
    decoded
        .into_observation()
        .map_err(WeatherSourceError::malformed_response)
}

fn map_transport_error(error: reqwest::Error) -> WeatherSourceError {
    if error.is_builder() {
        WeatherSourceError::request_setup(error.to_string())
    } else {
        WeatherSourceError::unavailable(error.to_string())
    }
}

fn map_status_error(status: StatusCode) -> WeatherSourceError {
    match status {
        StatusCode::NOT_FOUND => WeatherSourceError::city_not_found(),
        _ => WeatherSourceError::upstream(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown Status"),
        ),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network OpenWeather mapping helpers.

    use super::*;
    use rstest::rstest;

    const LONDON_BODY: &str = r#"{
        "name": "London",
        "main": { "temp": 15, "feels_like": 14, "humidity": 60, "pressure": 1012 },
        "weather": [
            { "id": 800, "main": "Clear", "description": "clear sky" },
            { "id": 701, "main": "Mist", "description": "mist" }
        ],
        "wind": { "speed": 3.5, "deg": 200 },
        "cod": 200
    }"#;

    #[test]
    fn parses_current_weather_into_observation() {
        let observation = parse_observation(LONDON_BODY.as_bytes()).expect("JSON should decode");

        assert_eq!(observation.city.as_str(), "london");
        assert_eq!(observation.temperature, 15.0);
        assert_eq!(observation.description, "clear sky");
        assert_eq!(observation.feels_like, 14.0);
        assert_eq!(observation.humidity, 60.0);
        assert_eq!(observation.pressure, 1012.0);
        assert_eq!(observation.wind_speed, 3.5);
    }

    #[rstest]
    #[case::not_json("<html>bad gateway</html>")]
    #[case::missing_main(r#"{ "name": "London", "weather": [], "wind": { "speed": 1 } }"#)]
    #[case::empty_conditions(
        r#"{ "name": "London", "main": { "temp": 1, "feels_like": 1, "humidity": 1, "pressure": 1 }, "weather": [], "wind": { "speed": 1 } }"#
    )]
    #[case::blank_name(
        r#"{ "name": " ", "main": { "temp": 1, "feels_like": 1, "humidity": 1, "pressure": 1 }, "weather": [{ "description": "fog" }], "wind": { "speed": 1 } }"#
    )]
    fn rejects_unusable_payloads(#[case] body: &str) {
        let error = parse_observation(body.as_bytes()).expect_err("decode should fail");
        assert!(
            matches!(error, WeatherSourceError::MalformedResponse { .. }),
            "unusable payloads should map to MalformedResponse, got {error:?}",
        );
    }

    #[rstest]
    #[case::not_found(StatusCode::NOT_FOUND, None)]
    #[case::unauthorised(StatusCode::UNAUTHORIZED, Some((401, "Unauthorized")))]
    #[case::rate_limited(StatusCode::TOO_MANY_REQUESTS, Some((429, "Too Many Requests")))]
    #[case::server_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        Some((500, "Internal Server Error"))
    )]
    fn maps_http_statuses_to_expected_domain_errors(
        #[case] status: StatusCode,
        #[case] upstream: Option<(u16, &str)>,
    ) {
        let expected = match upstream {
            Some((code, text)) => WeatherSourceError::upstream(code, text),
            None => WeatherSourceError::city_not_found(),
        };
        assert_eq!(map_status_error(status), expected);
    }

    #[test]
    fn builder_errors_map_to_request_setup() {
        let error = Client::new()
            .get("not a url")
            .build()
            .expect_err("relative URL cannot be built");
        assert!(error.is_builder());

        assert!(matches!(
            map_transport_error(error),
            WeatherSourceError::RequestSetup { .. }
        ));
    }

    #[test]
    fn body_preview_compacts_and_truncates() {
        let long = format!("{{ \"message\":\n  \"{}\" }}", "x".repeat(200));
        let preview = body_preview(long.as_bytes());
        assert!(preview.ends_with("..."));
        assert!(!preview.contains('\n'));
    }

    #[tokio::test]
    async fn blank_api_key_is_a_configuration_error() {
        let source = OpenWeatherHttpSource::new(
            Url::parse("http://127.0.0.1:9/weather").expect("valid URL"),
            "  ",
            Duration::from_secs(1),
        )
        .expect("client builds");
        let city = CityName::new("London").expect("valid city");

        let error = source.fetch_current(&city).await.expect_err("must fail");
        assert!(matches!(error, WeatherSourceError::Configuration { .. }));
    }
}
