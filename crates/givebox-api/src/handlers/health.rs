//! Health check and informational route handlers.

use axum::Json;
use serde_json::{json, Value};
use tracing::info;

/// Health check endpoint handler.
///
/// Takes no state and touches no dependencies: the route answers without
/// auth and must stay green even when the store is unreachable.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Informational root route.
///
/// Answers GET and HEAD; the method router strips the body for HEAD.
pub async fn root() -> Json<Value> {
    info!("Root route accessed");
    Json(json!({ "message": "Welcome to the Donation Webhook Service" }))
}
