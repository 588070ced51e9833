//! Weather lookup domain service.
//!
//! Implements the [`WeatherLookup`] driving port on top of a [`WeatherStore`]
//! and a [`WeatherSource`]. The store is consulted first; the provider is
//! only contacted on a miss, and its observation is persisted before it is
//! returned.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{
    CacheStatus, CreateOutcome, LookupOutcome, WeatherLookup, WeatherLookupError,
    WeatherLookupRequest, WeatherSource, WeatherStore, WeatherStoreError,
};
use crate::domain::{CityName, WeatherRecord};

/// Failure stage recorded in error logs.
#[derive(Debug, Clone, Copy)]
enum Stage {
    StoreLookup,
    ExternalFetch,
    StoreWrite,
    StoreReread,
}

impl Stage {
    fn as_str(self) -> &'static str {
        match self {
            Self::StoreLookup => "store_lookup",
            Self::ExternalFetch => "external_fetch",
            Self::StoreWrite => "store_write",
            Self::StoreReread => "store_reread",
        }
    }
}

fn log_failure(city: &CityName, stage: Stage, err: &WeatherLookupError) {
    if matches!(
        err,
        WeatherLookupError::CityNotFound { .. } | WeatherLookupError::NotCached { .. }
    ) {
        debug!(city = %city, stage = stage.as_str(), "weather lookup found nothing");
        return;
    }
    error!(city = %city, stage = stage.as_str(), error = %err, "weather lookup failed");
}

fn parse_city(request: &WeatherLookupRequest) -> Result<CityName, WeatherLookupError> {
    Ok(CityName::from_optional(request.city.as_deref())?)
}

/// Cache-or-fetch weather service.
#[derive(Clone)]
pub struct WeatherLookupService<S, F> {
    store: Arc<S>,
    source: Arc<F>,
}

impl<S, F> WeatherLookupService<S, F> {
    /// Create a new service over the given store and provider.
    pub fn new(store: Arc<S>, source: Arc<F>) -> Self {
        Self { store, source }
    }
}

impl<S, F> WeatherLookupService<S, F>
where
    S: WeatherStore,
    F: WeatherSource,
{
    async fn find(
        &self,
        city: &CityName,
        stage: Stage,
    ) -> Result<Option<WeatherRecord>, WeatherLookupError> {
        self.store.find_by_city(city).await.map_err(|err| {
            let err = WeatherLookupError::from(err);
            log_failure(city, stage, &err);
            err
        })
    }

    async fn fetch_and_store(&self, city: &CityName) -> Result<LookupOutcome, WeatherLookupError> {
        let observation = self.source.fetch_current(city).await.map_err(|err| {
            let err = WeatherLookupError::from_source(city, err);
            log_failure(city, Stage::ExternalFetch, &err);
            err
        })?;

        let outcome = self.store.create(&observation).await.map_err(|err| {
            let err = WeatherLookupError::from(err);
            log_failure(city, Stage::StoreWrite, &err);
            err
        })?;

        match outcome {
            CreateOutcome::Created(record) => {
                info!(city = %city, "weather cached from external source");
                Ok(LookupOutcome {
                    record,
                    cache: CacheStatus::Miss,
                })
            }
            CreateOutcome::AlreadyExists => {
                // The conflict is on the provider's canonical name, which may
                // differ from the requested key.
                let stored_city = &observation.city;
                debug!(city = %city, stored_city = %stored_city, "record already stored; re-reading");
                let record = self.find(stored_city, Stage::StoreReread).await?.ok_or_else(|| {
                    let err = WeatherLookupError::Store(WeatherStoreError::query(format!(
                        "record for '{stored_city}' vanished after a conflicting insert"
                    )));
                    log_failure(city, Stage::StoreReread, &err);
                    err
                })?;
                Ok(LookupOutcome {
                    record,
                    cache: CacheStatus::Hit,
                })
            }
        }
    }
}

#[async_trait]
impl<S, F> WeatherLookup for WeatherLookupService<S, F>
where
    S: WeatherStore,
    F: WeatherSource,
{
    async fn get_or_fetch(
        &self,
        request: WeatherLookupRequest,
    ) -> Result<LookupOutcome, WeatherLookupError> {
        let city = parse_city(&request)?;

        if let Some(record) = self.find(&city, Stage::StoreLookup).await? {
            debug!(city = %city, "weather cache hit");
            return Ok(LookupOutcome {
                record,
                cache: CacheStatus::Hit,
            });
        }

        debug!(city = %city, "weather cache miss");
        self.fetch_and_store(&city).await
    }

    async fn get_cached_only(
        &self,
        request: WeatherLookupRequest,
    ) -> Result<WeatherRecord, WeatherLookupError> {
        let city = parse_city(&request)?;

        self.find(&city, Stage::StoreLookup)
            .await?
            .ok_or(WeatherLookupError::NotCached { city })
    }
}

#[cfg(test)]
#[path = "weather_lookup_service_tests.rs"]
mod tests;
