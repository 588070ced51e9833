//! Driven port for persisted weather records.
//!
//! The store is the single source of truth for cached weather. Adapters must
//! enforce one record per [`CityName`] and report lost insert races through
//! [`CreateOutcome::AlreadyExists`] rather than as an error.

use async_trait::async_trait;

use crate::domain::{CityName, WeatherObservation, WeatherRecord};

use super::define_port_error;

define_port_error! {
    /// Errors raised by weather store adapters.
    pub enum WeatherStoreError {
        /// A connection to the backing store could not be obtained.
        Connection { message: String } => "weather store connection failed: {message}",
        /// A query failed during execution or row conversion.
        Query { message: String } => "weather store query failed: {message}",
    }
}

/// Result of an attempted insert.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// The record was inserted by this call.
    Created(WeatherRecord),
    /// A record for the city already existed, typically written by a
    /// concurrent first fetch. Nothing was written.
    AlreadyExists,
}

/// Port for reading and creating weather records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherStore: Send + Sync {
    /// Return the record for `city`, or `None` when nothing is cached.
    async fn find_by_city(&self, city: &CityName)
    -> Result<Option<WeatherRecord>, WeatherStoreError>;

    /// Atomically insert a record built from `observation` unless one exists
    /// for the same city.
    async fn create(
        &self,
        observation: &WeatherObservation,
    ) -> Result<CreateOutcome, WeatherStoreError>;
}
