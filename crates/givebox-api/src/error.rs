//! HTTP error mapping for the public API.
//!
//! Handlers map every failure to one of two fixed responses. Response
//! bodies never carry internal error detail; full errors go to the logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Error body returned to callers.
///
/// The `{"detail": ...}` shape is what the upstream integration expects
/// on failure and must not change.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Fixed human-readable detail string.
    pub detail: &'static str,
}

/// Errors surfaced by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Presented token did not match the configured secret.
    #[error("forbidden")]
    Forbidden,

    /// Persistence failed; details are logged, never returned.
    #[error("internal server error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            Self::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
