//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::weather_records;

/// Row struct for reading from the weather_records table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = weather_records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct WeatherRecordRow {
    pub id: Uuid,
    pub city: String,
    pub temperature: f64,
    pub description: String,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new weather records.
///
/// Timestamps are left to the column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = weather_records)]
pub(crate) struct NewWeatherRecordRow<'a> {
    pub id: Uuid,
    pub city: &'a str,
    pub temperature: f64,
    pub description: &'a str,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
}
