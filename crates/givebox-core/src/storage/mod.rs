//! Database access layer implementing the repository pattern for donation
//! persistence.
//!
//! The repository layer translates between domain models and the SQLite
//! schema. All database operations go through these repositories; direct
//! SQL outside this module is limited to test verification queries.

use std::sync::Arc;

use sqlx::SqlitePool;

pub mod donations;

use crate::error::Result;

/// Container for repository instances providing unified database access.
///
/// Manages a shared connection pool and hands out type-safe access to the
/// donation repository. Cloning is cheap; all clones share the pool.
#[derive(Clone)]
pub struct Storage {
    /// Repository for donation operations.
    pub donations: Arc<donations::Repository>,
}

impl Storage {
    /// Creates a new storage instance with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        let pool = Arc::new(pool);

        Self { donations: Arc::new(donations::Repository::new(pool)) }
    }
}

/// Creates the donations table and its indexes if they do not exist.
///
/// Idempotent; runs at startup before the first request is accepted. The
/// unique constraint on `charge_id` is the only defense against double
/// ingestion of the same upstream charge, so it lives in the schema
/// rather than in application code.
///
/// # Errors
///
/// Returns `CoreError::Database` if a DDL statement fails.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS donations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            charge_id TEXT NOT NULL UNIQUE,
            partner_donation_id TEXT,
            first_name TEXT,
            last_name TEXT,
            email TEXT,
            to_nonprofit TEXT NOT NULL,
            amount REAL NOT NULL,
            net_amount REAL NOT NULL,
            currency TEXT NOT NULL,
            frequency TEXT NOT NULL,
            donation_date TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            public_testimony TEXT,
            private_note TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_donations_partner_donation_id
        ON donations(partner_donation_id)
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
