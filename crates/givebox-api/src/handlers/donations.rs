//! Donation listing handler.
//!
//! Authenticated read surface returning every stored donation. Auth here
//! uses a query parameter rather than a header; the upstream integration
//! calls the two surfaces differently and both shapes are contractual.

use axum::{
    extract::{Query, State},
    Json,
};
use givebox_core::Donation;
use serde::Deserialize;
use tracing::{error, instrument, warn};

use crate::{error::ApiError, AppState};

/// Query parameters accepted by the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Shared-secret token, compared against the same secret the webhook
    /// header uses.
    pub token: Option<String>,
}

/// Lists every stored donation in insertion order.
///
/// Returns the full table on every call; pagination is out of scope for
/// the integration this serves.
///
/// # Errors
///
/// - 403 when the `token` query parameter is missing or wrong
/// - 500 when the store read fails
#[instrument(name = "list_donations", skip(state, query))]
pub async fn list_donations(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Donation>>, ApiError> {
    // query is skipped from the span so the token never reaches logs.
    if !state.token.authorize(query.token.as_deref().unwrap_or_default()) {
        warn!("Unauthorized donations listing attempt");
        return Err(ApiError::Forbidden);
    }

    match state.storage.donations.list_all().await {
        Ok(donations) => Ok(Json(donations)),
        Err(e) => {
            error!(error = %e, "Error retrieving donations");
            Err(ApiError::Internal)
        },
    }
}
