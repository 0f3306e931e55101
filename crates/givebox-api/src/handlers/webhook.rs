//! Donation webhook ingestion handler.
//!
//! Accepts donation notifications from the upstream payment processor,
//! authenticates the shared-secret header, and persists the donation
//! through the storage layer.

use axum::{extract::State, http::HeaderMap, Json};
use givebox_core::NewDonation;
use serde::Serialize;
use tracing::{error, info, instrument, warn};

use crate::{error::ApiError, AppState};

/// Header carrying the shared-secret token.
const TOKEN_HEADER: &str = "x-webhook-token";

/// Header carrying the upstream correlation id.
const CORRELATION_HEADER: &str = "cf-ray";

/// Sentinel used when the upstream edge did not forward a correlation id.
const CORRELATION_MISSING: &str = "Not available";

/// Acknowledgment returned for an accepted donation.
///
/// Carries no donation data; the upstream processor only checks for
/// success.
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    /// Fixed status marker.
    pub status: &'static str,
}

impl WebhookAck {
    fn success() -> Self {
        Self { status: "success" }
    }
}

/// Ingests a donation webhook.
///
/// The JSON body binds to [`NewDonation`] before this function runs, so
/// a payload failing required-field or type constraints rejects with the
/// framework's 422 regardless of the token. Inside the handler the token
/// check comes first; persistence is only attempted for authenticated
/// calls.
///
/// # Errors
///
/// - 403 when the token header is missing or wrong
/// - 500 when the insert fails, including a duplicate `chargeId`
#[instrument(
    name = "receive_webhook",
    skip(state, headers, donation),
    fields(cf_ray = correlation_id(&headers))
)]
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(donation): Json<NewDonation>,
) -> Result<Json<WebhookAck>, ApiError> {
    info!("Received webhook request");

    let presented = headers.get(TOKEN_HEADER).and_then(|v| v.to_str().ok()).unwrap_or_default();
    if !state.token.authorize(presented) {
        warn!("Unauthorized webhook attempt");
        return Err(ApiError::Forbidden);
    }

    match state.storage.donations.create(&donation).await {
        Ok(stored) => {
            info!(donation_id = %stored.id, charge_id = %stored.charge_id, "Donation stored");
            Ok(Json(WebhookAck::success()))
        },
        Err(e) => {
            error!(error = %e, charge_id = %donation.charge_id, "Error processing donation");
            Err(ApiError::Internal)
        },
    }
}

/// Reads the correlation id forwarded by the upstream edge network.
fn correlation_id(headers: &HeaderMap) -> &str {
    headers.get(CORRELATION_HEADER).and_then(|v| v.to_str().ok()).unwrap_or(CORRELATION_MISSING)
}
