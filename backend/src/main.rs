//! Server entry point: loads settings, prepares the user store and serves
//! the form, JSON endpoints, probes and (in debug builds) OpenAPI docs.

mod server;

use std::net::SocketAddr;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use user_forms::config::AppSettings;
use user_forms::inbound::http::health::HealthState;
use user_forms::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

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

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr: SocketAddr = settings.bind_addr().parse().map_err(|e| {
        std::io::Error::other(format!("invalid bind address {}: {e}", settings.bind_addr()))
    })?;

    let mut config = ServerConfig::new(bind_addr).with_language_policy(settings.language_policy());
    if let Some(url) = settings.database_url() {
        run_pending_migrations(url)
            .await
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size()))
            .await
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "user form server listening");
    server.await
}
