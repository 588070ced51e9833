//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape and live in the inbound
//! adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server or a dependency.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[serde(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "city not found by external source")]
    message: String,
    /// Text of the underlying failure, present on server errors.
    #[schema(example = "external weather API error: 500 - Internal Server Error")]
    error: Option<String>,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::WeatherRecord`].
#[derive(ToSchema)]
#[schema(as = WeatherRecord)]
#[serde(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct WeatherRecordSchema {
    /// Record identifier.
    #[schema(value_type = String, format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Normalised city name.
    #[schema(example = "london")]
    city: String,
    /// Air temperature in degrees Celsius.
    #[schema(example = 15.0)]
    temperature: f64,
    /// Description of the first reported weather condition.
    #[schema(example = "clear sky")]
    description: String,
    /// Perceived temperature in degrees Celsius.
    #[schema(example = 14.0)]
    feels_like: f64,
    /// Relative humidity in percent.
    #[schema(example = 60.0)]
    humidity: f64,
    /// Atmospheric pressure in hPa.
    #[schema(example = 1012.0)]
    pressure: f64,
    /// Wind speed in metres per second.
    #[schema(example = 3.5)]
    wind_speed: f64,
    /// Creation timestamp (RFC 3339).
    #[schema(value_type = String, format = DateTime, example = "2026-10-18T09:00:00Z")]
    created_at: String,
    /// Last update timestamp (RFC 3339); equal to `createdAt`.
    #[schema(value_type = String, format = DateTime, example = "2026-10-18T09:00:00Z")]
    updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        assert_eq!(ErrorCodeSchema::name(), "ErrorCode");
        for code in ["invalid_request", "not_found", "internal_error"] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn error_schema_uses_camel_case_fields() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "Error");
        assert!(schema_json.contains("traceId"), "schema should contain traceId");
        assert!(schema_json.contains("\"error\""), "schema should contain error");
    }

    #[test]
    fn weather_record_schema_uses_camel_case_fields() {
        let schema_json = schema_to_json::<WeatherRecordSchema>();
        assert_eq!(WeatherRecordSchema::name(), "WeatherRecord");
        for field in ["feelsLike", "windSpeed", "createdAt", "updatedAt"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }
}
