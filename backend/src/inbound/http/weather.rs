//! Weather API handlers.
//!
//! ```text
//! GET /api/v1/weather?city=London
//! GET /api/v1/weather/london
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{CityNameValidationError, Error};
use crate::domain::ports::{CacheStatus, WeatherLookupError, WeatherLookupRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, WeatherRecordSchema};
use crate::inbound::http::state::HttpState;

const FETCH_FAILURE_MESSAGE: &str = "Internal server error while fetching weather.";
const CACHED_FAILURE_MESSAGE: &str = "Internal server error while retrieving cached weather.";
const CITY_NOT_FOUND_MESSAGE: &str = "city not found by external source";

/// Query parameters for `GET /api/v1/weather`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeatherQuery {
    /// City to look up; trimmed and matched case-insensitively.
    #[param(example = "London")]
    pub city: Option<String>,
}

/// Query extractor config for the weather scope.
///
/// `WeatherQuery` has a single string field, so any decoding failure means
/// `city` was not one string (for example `?city=a&city=b`). Such requests
/// get the same `invalid_request` body as other validation failures.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|_err, _req| {
        Error::invalid_request(CityNameValidationError::NotAString.to_string()).into()
    })
}

fn map_lookup_error(err: WeatherLookupError, raw_city: &str, failure_message: &str) -> Error {
    match err {
        WeatherLookupError::Validation(validation) => Error::invalid_request(validation.to_string()),
        WeatherLookupError::NotCached { .. } => Error::not_found(format!(
            "Weather data for city '{raw_city}' not found in cache."
        )),
        WeatherLookupError::CityNotFound { .. } => Error::not_found(CITY_NOT_FOUND_MESSAGE),
        other => Error::internal(failure_message).with_error(other.to_string()),
    }
}

/// Return weather for a city, fetching and caching it on first request.
#[utoipa::path(
    get,
    path = "/api/v1/weather",
    params(WeatherQuery),
    responses(
        (status = 200, description = "Cached weather record", body = WeatherRecordSchema),
        (status = 201, description = "Weather fetched and cached", body = WeatherRecordSchema),
        (status = 400, description = "Invalid city name", body = ErrorSchema),
        (status = 404, description = "City unknown to the weather provider", body = ErrorSchema),
        (status = 500, description = "Provider or store failure", body = ErrorSchema)
    ),
    tags = ["weather"],
    operation_id = "getWeather"
)]
#[get("/weather")]
pub async fn get_weather(
    state: web::Data<HttpState>,
    query: web::Query<WeatherQuery>,
) -> ApiResult<HttpResponse> {
    let WeatherQuery { city } = query.into_inner();
    let raw_city = city.clone().unwrap_or_default();
    let outcome = state
        .weather
        .get_or_fetch(WeatherLookupRequest { city })
        .await
        .map_err(|err| map_lookup_error(err, &raw_city, FETCH_FAILURE_MESSAGE))?;

    let mut response = match outcome.cache {
        CacheStatus::Hit => HttpResponse::Ok(),
        CacheStatus::Miss => HttpResponse::Created(),
    };
    Ok(response.json(outcome.record))
}

/// Return cached weather for a city without contacting the provider.
#[utoipa::path(
    get,
    path = "/api/v1/weather/{city}",
    params(("city" = String, Path, description = "City to look up", example = "london")),
    responses(
        (status = 200, description = "Cached weather record", body = WeatherRecordSchema),
        (status = 400, description = "Invalid city name", body = ErrorSchema),
        (status = 404, description = "City not cached", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["weather"],
    operation_id = "getCachedWeather"
)]
#[get("/weather/{city}")]
pub async fn get_cached_weather(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let raw_city = path.into_inner();
    let record = state
        .weather
        .get_cached_only(WeatherLookupRequest::for_city(raw_city.as_str()))
        .await
        .map_err(|err| map_lookup_error(err, &raw_city, CACHED_FAILURE_MESSAGE))?;

    Ok(HttpResponse::Ok().json(record))
}

#[cfg(test)]
#[path = "weather_tests.rs"]
mod tests;
