//! Test infrastructure and utilities for deterministic testing.
//!
//! Provides per-test SQLite databases with the schema installed, plus
//! fixture payloads for donation tests. Every environment is isolated in
//! its own temporary directory and cleaned up on drop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use anyhow::Result;
use givebox_core::storage;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tempfile::TempDir;

pub mod fixtures;

pub use givebox_core::{storage::Storage, Donation, DonationId, NewDonation};

/// Test environment with an isolated SQLite database.
///
/// Each environment creates its own database file inside a temporary
/// directory, installs the schema, and tears everything down on drop.
/// The database is file-backed rather than in-memory so that every pool
/// connection sees the same data.
pub struct TestEnv {
    pool: SqlitePool,
    _dir: TempDir,
}

impl TestEnv {
    /// Creates a fresh environment with the schema installed.
    ///
    /// # Errors
    ///
    /// Returns error if the temporary directory, the database file, or
    /// the schema cannot be created.
    pub async fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let db_path = dir.path().join("donations.db");

        let options = SqliteConnectOptions::new().filename(&db_path).create_if_missing(true);

        let pool = SqlitePoolOptions::new().max_connections(5).connect_with(options).await?;

        storage::ensure_schema(&pool).await?;

        Ok(Self { pool, _dir: dir })
    }

    /// Returns the database pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Builds a storage handle over this environment's pool.
    pub fn storage(&self) -> Storage {
        Storage::new(self.pool.clone())
    }
}
