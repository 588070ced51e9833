//! Backend entry-point: loads settings, prepares the weather store, and serves
//! the REST API.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use weather_backend::config::AppSettings;
use weather_backend::inbound::http::health::HealthState;
use weather_backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::from_process_env()
        .map_err(|err| std::io::Error::other(format!("invalid configuration: {err}")))?;

    run_migrations(&settings.database.url)
        .await
        .map_err(|err| std::io::Error::other(format!("database migration failed: {err}")))?;

    let pool = DbPool::new(
        PoolConfig::new(&settings.database.url).with_max_size(settings.database.max_connections),
    )
    .await
    .map_err(|err| std::io::Error::other(format!("failed to create database pool: {err}")))?;
    pool.check_connection()
        .await
        .map_err(|err| std::io::Error::other(format!("database unreachable: {err}")))?;
    info!("connected to weather store");

    let health_state = web::Data::new(HealthState::new());
    let config =
        ServerConfig::new(settings.bind_addr, settings.openweather).with_db_pool(pool);
    let server = create_server(health_state.clone(), config)?;
    info!(addr = %settings.bind_addr, "weather service listening");

    let result = server.await;
    health_state.mark_unhealthy();
    info!("weather service stopped");
    result
}
