//! Backend entry-point: loads settings, prepares storage, and serves the API.

mod server;

use std::net::SocketAddr;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use trivia_backend::inbound::http::health::HealthState;
use trivia_backend::outbound::persistence::{DbPool, run_pending_migrations};
use trivia_backend::settings::ServerSettings;

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

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr: SocketAddr = settings.bind_addr().parse().map_err(|e| {
        std::io::Error::other(format!("invalid bind address {}: {e}", settings.bind_addr()))
    })?;

    let mut config = ServerConfig::new(bind_addr);
    match settings.pool_config() {
        Some(pool_config) => {
            run_pending_migrations(pool_config.database_url())
                .await
                .map_err(std::io::Error::other)?;
            let pool = DbPool::new(&pool_config)
                .await
                .map_err(std::io::Error::other)?;
            info!("serving from PostgreSQL");
            config = config.with_db_pool(pool);
        }
        None => warn!("no database configured; serving from the in-memory store"),
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting trivia backend");
    create_server(health_state, config)?.await
}
