//! In-memory weather store.
//!
//! Backs the [`WeatherStore`] port with a `RwLock<HashMap>` keyed by
//! [`CityName`]. Used by integration tests and local runs without
//! PostgreSQL. The write lock makes check-and-insert atomic, so concurrent
//! first lookups for a city observe [`CreateOutcome::AlreadyExists`] exactly
//! like the Diesel adapter's unique constraint.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{CreateOutcome, WeatherStore, WeatherStoreError};
use crate::domain::{CityName, WeatherObservation, WeatherRecord};

/// Process-local weather store.
#[derive(Clone)]
pub struct InMemoryWeatherStore {
    records: Arc<RwLock<HashMap<CityName, WeatherRecord>>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryWeatherStore {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl WeatherStore for InMemoryWeatherStore {
    async fn find_by_city(
        &self,
        city: &CityName,
    ) -> Result<Option<WeatherRecord>, WeatherStoreError> {
        Ok(self.records.read().await.get(city).cloned())
    }

    async fn create(
        &self,
        observation: &WeatherObservation,
    ) -> Result<CreateOutcome, WeatherStoreError> {
        let mut records = self.records.write().await;
        if records.contains_key(&observation.city) {
            return Ok(CreateOutcome::AlreadyExists);
        }
        let record =
            WeatherRecord::from_observation(Uuid::new_v4(), observation.clone(), self.clock.utc());
        records.insert(record.city.clone(), record.clone());
        Ok(CreateOutcome::Created(record))
    }
}
