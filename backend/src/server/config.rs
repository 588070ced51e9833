//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use weather_backend::config::OpenWeatherSettings;
use weather_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) openweather: OpenWeatherSettings,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration for the provider settings.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, openweather: OpenWeatherSettings) -> Self {
        Self {
            bind_addr,
            openweather,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for the weather store.
    ///
    /// Without a pool the server caches in process memory only.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
