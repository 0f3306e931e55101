//! Donation domain models and strongly-typed identifiers.
//!
//! Defines the persisted donation entity, its inbound payload schema, and
//! the newtype ID wrapper. Field names follow the upstream payment
//! processor's camelCase wire format; database serialization traits map
//! the ID onto the store's integer surrogate key.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

type SqliteDb = sqlx::Sqlite;
type SqliteTypeInfo = sqlx::sqlite::SqliteTypeInfo;
type SqliteValueRef<'r> = sqlx::sqlite::SqliteValueRef<'r>;
type SqliteArgumentBuffer<'q> = Vec<sqlx::sqlite::SqliteArgumentValue<'q>>;
type EncodeResult =
    Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync + 'static>>;
type BoxDynError = sqlx::error::BoxDynError;

/// Strongly-typed donation identifier.
///
/// Wraps the store's surrogate key to prevent mixing with other integer
/// values. IDs are assigned by the database on insert, monotonically
/// increasing, and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DonationId(pub i64);

impl fmt::Display for DonationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DonationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl sqlx::Type<SqliteDb> for DonationId {
    fn type_info() -> SqliteTypeInfo {
        <i64 as sqlx::Type<SqliteDb>>::type_info()
    }
}

impl<'r> sqlx::Decode<'r, SqliteDb> for DonationId {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let id = <i64 as sqlx::Decode<SqliteDb>>::decode(value)?;
        Ok(Self(id))
    }
}

impl<'q> sqlx::Encode<'q, SqliteDb> for DonationId {
    fn encode_by_ref(&self, buf: &mut SqliteArgumentBuffer<'q>) -> EncodeResult {
        <i64 as sqlx::Encode<'q, SqliteDb>>::encode_by_ref(&self.0, buf)
    }
}

/// A donation accepted from the upstream payment processor.
///
/// Persisted exactly once per accepted webhook call, never updated or
/// deleted. Serializes to the processor's camelCase field names, with
/// `donationDate` as an ISO-8601 timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    /// Surrogate key assigned by the store.
    pub id: DonationId,

    /// Charge identifier from the payment processor. Unique; the natural
    /// idempotency key for inbound webhooks.
    pub charge_id: String,

    /// Partner's own donation identifier, when one exists.
    pub partner_donation_id: Option<String>,

    /// Donor first name.
    pub first_name: Option<String>,

    /// Donor last name.
    pub last_name: Option<String>,

    /// Donor email address.
    pub email: Option<String>,

    /// Receiving nonprofit, stored as an opaque JSON object.
    pub to_nonprofit: sqlx::types::Json<Map<String, Value>>,

    /// Gross donation amount.
    pub amount: f64,

    /// Net amount after processor fees.
    pub net_amount: f64,

    /// Currency code as supplied upstream; not validated.
    pub currency: String,

    /// Donation frequency (e.g. "one-time", "recurring"); free-form.
    pub frequency: String,

    /// When the donation occurred, per the processor.
    pub donation_date: DateTime<Utc>,

    /// Public testimony text from the donor.
    pub public_testimony: Option<String>,

    /// Private note from the donor.
    pub private_note: Option<String>,
}

/// Inbound webhook payload for a new donation.
///
/// Same shape as [`Donation`] minus the store-assigned `id`. Unknown
/// extra fields in the payload are accepted and discarded; the upstream
/// processor adds fields without notice and must not be rejected for it.
/// Do not annotate with `deny_unknown_fields`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    /// Charge identifier from the payment processor. Required.
    pub charge_id: String,

    /// Partner's own donation identifier.
    pub partner_donation_id: Option<String>,

    /// Donor first name.
    pub first_name: Option<String>,

    /// Donor last name.
    pub last_name: Option<String>,

    /// Donor email address.
    pub email: Option<String>,

    /// Receiving nonprofit. Must be a JSON object; contents are opaque.
    pub to_nonprofit: Map<String, Value>,

    /// Gross donation amount. Required.
    pub amount: f64,

    /// Net amount after processor fees. Required.
    pub net_amount: f64,

    /// Currency code. Required, not validated.
    pub currency: String,

    /// Donation frequency. Required, free-form.
    pub frequency: String,

    /// When the donation occurred. Required.
    pub donation_date: DateTime<Utc>,

    /// Public testimony text from the donor.
    pub public_testimony: Option<String>,

    /// Private note from the donor.
    pub private_note: Option<String>,
}
