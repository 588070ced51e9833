//! PostgreSQL-backed `WeatherStore` implementation using Diesel ORM.
//!
//! Uniqueness per city is enforced by the `weather_records_city_key`
//! constraint. Inserts use `ON CONFLICT (city) DO NOTHING RETURNING`, so a
//! lost race yields no row and is reported as [`CreateOutcome::AlreadyExists`].
//! A unique violation surfacing as an error is mapped the same way.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{CreateOutcome, WeatherStore, WeatherStoreError};
use crate::domain::{CityName, WeatherObservation, WeatherRecord};

use super::models::{NewWeatherRecordRow, WeatherRecordRow};
use super::pool::{DbPool, PoolError};
use super::schema::weather_records;

/// Diesel-backed implementation of the `WeatherStore` port.
#[derive(Clone)]
pub struct DieselWeatherStore {
    pool: DbPool,
}

impl DieselWeatherStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> WeatherStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            WeatherStoreError::connection(message)
        }
    }
}

fn map_diesel_error(error: DieselError) -> WeatherStoreError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => WeatherStoreError::query("record not found"),
        DieselError::QueryBuilderError(_) => WeatherStoreError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            WeatherStoreError::connection("database connection error")
        }
        DieselError::DeserializationError(err) => {
            WeatherStoreError::query(format!("failed to decode weather row: {err}"))
        }
        _ => WeatherStoreError::query("database error"),
    }
}

fn is_unique_violation(error: &DieselError) -> bool {
    matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    )
}

fn row_to_record(row: WeatherRecordRow) -> Result<WeatherRecord, WeatherStoreError> {
    let city = CityName::new(&row.city).map_err(|err| {
        WeatherStoreError::query(format!("invalid city {:?} in database: {err}", row.city))
    })?;

    Ok(WeatherRecord {
        id: row.id,
        city,
        temperature: row.temperature,
        description: row.description,
        feels_like: row.feels_like,
        humidity: row.humidity,
        pressure: row.pressure,
        wind_speed: row.wind_speed,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[async_trait]
impl WeatherStore for DieselWeatherStore {
    async fn find_by_city(
        &self,
        city: &CityName,
    ) -> Result<Option<WeatherRecord>, WeatherStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<WeatherRecordRow> = weather_records::table
            .filter(weather_records::city.eq(city.as_str()))
            .select(WeatherRecordRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_record).transpose()
    }

    async fn create(
        &self,
        observation: &WeatherObservation,
    ) -> Result<CreateOutcome, WeatherStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewWeatherRecordRow {
            id: Uuid::new_v4(),
            city: observation.city.as_str(),
            temperature: observation.temperature,
            description: observation.description.as_str(),
            feels_like: observation.feels_like,
            humidity: observation.humidity,
            pressure: observation.pressure,
            wind_speed: observation.wind_speed,
        };

        let inserted = diesel::insert_into(weather_records::table)
            .values(&new_row)
            .on_conflict(weather_records::city)
            .do_nothing()
            .returning(WeatherRecordRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional();

        match inserted {
            Ok(Some(row)) => row_to_record(row).map(CreateOutcome::Created),
            Ok(None) => {
                debug!(city = %observation.city, "weather record already stored");
                Ok(CreateOutcome::AlreadyExists)
            }
            Err(err) if is_unique_violation(&err) => Ok(CreateOutcome::AlreadyExists),
            Err(err) => Err(map_diesel_error(err)),
        }
    }
}
