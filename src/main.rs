//! Givebox donation webhook service.
//!
//! Main entry point for the givebox server. Initializes logging,
//! configuration, and storage, then serves HTTP until shutdown.

use std::str::FromStr;

use anyhow::{Context, Result};
use givebox_api::{AppState, Config, SharedToken};
use givebox_core::storage::{self, Storage};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("Starting givebox donation webhook service");

    let config = Config::load()?;
    let addr = config.parse_server_addr()?;
    info!(
        database_url = %config.database_url,
        server_addr = %addr,
        max_connections = config.database_max_connections,
        "Configuration loaded"
    );

    let db_pool = create_database_pool(&config).await?;
    info!("Database connection pool established");

    storage::ensure_schema(&db_pool)
        .await
        .context("Failed to create donations schema")?;
    info!("Database schema ready");

    let state = AppState {
        storage: Storage::new(db_pool.clone()),
        token: SharedToken::new(&config.secret_token),
    };

    info!(addr = %addr, "Givebox is ready to receive donations");

    givebox_api::start_server(state, addr).await?;

    db_pool.close().await;
    info!("Database connections closed");

    info!("Givebox shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,givebox=debug,tower_http=debug"))
        .expect("Invalid RUST_LOG environment variable");

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

/// Creates the SQLite connection pool and verifies it works.
///
/// The database file is created on first connect if it does not exist,
/// so a fresh deployment only needs a writable directory. Any failure
/// here is fatal; the process must not start serving traffic without a
/// working store.
async fn create_database_pool(config: &Config) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_with(options)
        .await
        .context("Failed to create database connection pool")?;

    // Verify connection works
    sqlx::query("SELECT 1")
        .fetch_one(&pool)
        .await
        .context("Failed to verify database connection")?;

    Ok(pool)
}
