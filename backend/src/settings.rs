//! Start-up settings loaded via OrthoConfig.
//!
//! Values come from `TRIVIA_*` environment variables, command-line flags,
//! or a configuration file, in OrthoConfig's usual precedence order.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Settings controlling the listener and storage backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRIVIA")]
pub struct ServerSettings {
    /// Socket address to listen on.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// PostgreSQL connection string. Without one the in-memory store is used.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = DEFAULT_DB_MAX_CONNECTIONS)]
    pub db_max_connections: u32,
}

impl ServerSettings {
    /// Return the configured listen address.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    /// Return the configured pool size.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    /// Pool configuration when a database URL is set.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(|url| PoolConfig::new(url).with_max_size(self.db_max_connections()))
    }
}
