//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! The weather store is backed by PostgreSQL via `diesel-async` with `bb8`
//! connection pooling. Diesel row structs (`models.rs`) and table
//! definitions (`schema.rs`) stay private to this module; only domain types
//! cross the port boundary.
//!
//! # Example
//!
//! ```ignore
//! use weather_backend::outbound::persistence::{DbPool, DieselWeatherStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/weather")).await?;
//! let store = DieselWeatherStore::new(pool);
//! ```

mod diesel_weather_store;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_weather_store::DieselWeatherStore;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
