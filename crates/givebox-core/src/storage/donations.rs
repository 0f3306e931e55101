//! Repository for donation database operations.
//!
//! Owns the transaction boundary for donation ingestion: insert, commit,
//! and post-commit reload happen here so handlers never touch SQL.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::{
    error::{CoreError, Result},
    models::{Donation, DonationId, NewDonation},
};

/// Repository for donation database operations.
pub struct Repository {
    pool: Arc<SqlitePool>,
}

impl Repository {
    /// Creates a new repository instance.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Persists a donation in a single transaction and returns the stored
    /// row.
    ///
    /// Inserts the donation, commits, then reloads the row from
    /// post-commit state so the returned entity carries the
    /// store-assigned id exactly as persisted. Dropping the transaction
    /// before commit rolls the insert back, so an error on any step
    /// leaves no partial row.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ConstraintViolation` when `charge_id` already
    /// exists, or `CoreError::Database` for any other insert or commit
    /// failure.
    pub async fn create(&self, donation: &NewDonation) -> Result<Donation> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO donations (
                charge_id, partner_donation_id, first_name, last_name, email,
                to_nonprofit, amount, net_amount, currency, frequency,
                donation_date, public_testimony, private_note
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&donation.charge_id)
        .bind(&donation.partner_donation_id)
        .bind(&donation.first_name)
        .bind(&donation.last_name)
        .bind(&donation.email)
        .bind(sqlx::types::Json(&donation.to_nonprofit))
        .bind(donation.amount)
        .bind(donation.net_amount)
        .bind(&donation.currency)
        .bind(&donation.frequency)
        .bind(donation.donation_date)
        .bind(&donation.public_testimony)
        .bind(&donation.private_note)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        self.find_by_id(DonationId(id))
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("donation {id} missing after commit")))
    }

    /// Fetches a donation by its surrogate key.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn find_by_id(&self, id: DonationId) -> Result<Option<Donation>> {
        let donation = sqlx::query_as::<_, Donation>(
            r#"
            SELECT id, charge_id, partner_donation_id, first_name, last_name, email,
                   to_nonprofit, amount, net_amount, currency, frequency,
                   donation_date, public_testimony, private_note
            FROM donations
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(donation)
    }

    /// Fetches a donation by its upstream charge identifier.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn find_by_charge_id(&self, charge_id: &str) -> Result<Option<Donation>> {
        let donation = sqlx::query_as::<_, Donation>(
            r#"
            SELECT id, charge_id, partner_donation_id, first_name, last_name, email,
                   to_nonprofit, amount, net_amount, currency, frequency,
                   donation_date, public_testimony, private_note
            FROM donations
            WHERE charge_id = ?
            "#,
        )
        .bind(charge_id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(donation)
    }

    /// Returns every stored donation in insertion order.
    ///
    /// No pagination; the listing endpoint returns the full table on
    /// every call.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Donation>> {
        let donations = sqlx::query_as::<_, Donation>(
            r#"
            SELECT id, charge_id, partner_donation_id, first_name, last_name, email,
                   to_nonprofit, amount, net_amount, currency, frequency,
                   donation_date, public_testimony, private_note
            FROM donations
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(donations)
    }

    /// Counts stored donations.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM donations")
            .fetch_one(&*self.pool)
            .await?;

        Ok(count)
    }
}
