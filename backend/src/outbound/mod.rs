//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed weather store using Diesel ORM
//! - **memory**: process-local weather store for tests and local runs
//! - **openweather**: HTTP client for the OpenWeather current-weather API
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod memory;
pub mod openweather;
pub mod persistence;
