//! Backend entry point: settings, tracing, storage and the HTTP server.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use postbox::inbound::http::health::HealthState;
use postbox::outbound::persistence::{DbPool, run_migrations};
use server::{AppSettings, ServerConfig, create_server};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

async fn server_config(settings: &AppSettings) -> std::io::Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_addr()?);
    let Some(database_url) = settings.database_url() else {
        return Ok(config);
    };

    if settings.run_migrations() {
        let applied = run_migrations(database_url.to_owned())
            .await
            .map_err(std::io::Error::other)?;
        info!(applied, "database migrations complete");
    }

    let pool = DbPool::new(settings.pool_config(database_url))
        .await
        .map_err(std::io::Error::other)?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let config = server_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let outcome = server.await;
    health_state.mark_draining();
    outcome
}
