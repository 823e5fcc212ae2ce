//! Service entry point: wires configuration, migrations, the connection
//! pool, and the HTTP endpoints.

use std::sync::Arc;

use actix_web::{HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use contact_intake::inbound::http::health::HealthState;
use contact_intake::inbound::http::state::HttpState;
use contact_intake::outbound::persistence::{DbPool, DieselContactRepository, PoolConfig, run_migrations};
use contact_intake::server::build_app;
use contact_intake::server::config::AppConfig;

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

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    run_migrations(config.database_url.clone())
        .await
        .map_err(std::io::Error::other)?;

    let pool = DbPool::new(
        PoolConfig::new(&config.database_url).with_max_size(config.pool_max_size),
    )
    .await
    .map_err(std::io::Error::other)?;
    let contacts = Arc::new(DieselContactRepository::new(pool));

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays accessible.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(
            HttpState::new(contacts.clone()),
            server_health_state.clone(),
        )
    })
    .bind(config.bind_addr)?;

    health_state.mark_ready();
    info!(addr = %config.bind_addr, "intake server started");
    server.run().await
}
