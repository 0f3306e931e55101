//! Test fixtures for donation payloads.
//!
//! Builders for the JSON bodies the webhook endpoint accepts and the
//! typed records the storage layer persists. Charge identifiers are
//! taken as parameters so tests control uniqueness.

use chrono::{DateTime, Utc};
use givebox_core::NewDonation;
use serde_json::{json, Map, Value};

/// Returns a complete webhook payload with the given charge identifier.
pub fn donation_payload(charge_id: &str) -> Value {
    json!({
        "chargeId": charge_id,
        "partnerDonationId": "pd_1001",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.org",
        "toNonprofit": nonprofit(),
        "amount": 50.0,
        "netAmount": 47.5,
        "currency": "USD",
        "frequency": "Monthly",
        "donationDate": "2024-01-01T00:00:00Z",
        "publicTestimony": "Keep up the great work!",
        "privateNote": "Matched by employer"
    })
}

/// Returns a typed donation record with the given charge identifier.
pub fn new_donation(charge_id: &str) -> NewDonation {
    NewDonation {
        charge_id: charge_id.to_string(),
        partner_donation_id: Some("pd_1001".to_string()),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        email: Some("ada@example.org".to_string()),
        to_nonprofit: nonprofit(),
        amount: 50.0,
        net_amount: 47.5,
        currency: "USD".to_string(),
        frequency: "Monthly".to_string(),
        donation_date: donation_date(),
        public_testimony: Some("Keep up the great work!".to_string()),
        private_note: Some("Matched by employer".to_string()),
    }
}

/// Returns the nonprofit object used across fixtures.
pub fn nonprofit() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("id".to_string(), json!("np_1"));
    map.insert("name".to_string(), json!("Example Fund"));
    map
}

/// Returns the fixed donation timestamp used across fixtures.
pub fn donation_date() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("valid fixture timestamp")
        .with_timezone(&Utc)
}
