//! Givebox HTTP API.
//!
//! Routes, handlers, configuration, and the shared-secret auth guard for
//! the donation webhook service.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use auth::SharedToken;
pub use config::Config;
pub use server::{create_router, start_server};

use givebox_core::storage::Storage;

/// Shared application state passed to every handler.
///
/// Holds only immutable startup-time values; nothing here mutates across
/// requests. The storage handle wraps the shared connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Storage layer handle.
    pub storage: Storage,

    /// Process-wide webhook secret.
    pub token: SharedToken,
}
