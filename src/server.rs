//! HTTP server initialization and runtime setup.
//!
//! Builds the connection pool, wires repositories into services, and runs the
//! Axum server until Ctrl+C.

use crate::application::services::{BootstrapService, ShortcodeService};
use crate::config::Config;
use crate::infrastructure::persistence::{PgShortcodeRepository, PgStoreBootstrap};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Creates a lazily-connecting pool for the shortcode database.
///
/// No connection is opened until the first query, so the server can start
/// before `GET /init` has created the database.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed.
pub fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config.database_url()?;

    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_lazy(&database_url)
        .context("Invalid database connection string")
}

/// Builds the application state backed by PostgreSQL.
///
/// # Errors
///
/// Returns an error if the maintenance connection string cannot be built.
pub fn build_state(config: &Config, pool: Arc<PgPool>) -> Result<AppState> {
    let shortcode_repository = Arc::new(PgShortcodeRepository::new(pool.clone()));
    let store_bootstrap = Arc::new(PgStoreBootstrap::new(
        pool,
        config.maintenance_url()?,
        config.database_name.clone(),
    ));

    Ok(AppState::new(
        Arc::new(ShortcodeService::new(shortcode_repository)),
        Arc::new(BootstrapService::new(store_bootstrap)),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The database connection string is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = Arc::new(connect_pool(&config)?);
    let state = build_state(&config, pool.clone())?;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping gracefully...");
}
