//! HTTP request handlers for the givebox API.
//!
//! Handlers follow a consistent pattern:
//! - Request binding happens in extractors, so schema failures reject
//!   with the framework's 422 before handler logic runs
//! - Token checks come first inside the handler body
//! - Storage errors are caught here and mapped to fixed responses
//!
//! # Handler Organization
//!
//! Handlers are grouped by surface:
//! - `webhook` - donation ingestion
//! - `donations` - authenticated listing
//! - `health` - health check and informational routes

pub mod donations;
pub mod health;
pub mod webhook;

// Re-export handlers for convenient access
pub use donations::list_donations;
pub use health::{health_check, root};
pub use webhook::receive_webhook;
