//! Core domain model and storage for the donation webhook service.
//!
//! Provides the donation entity, the inbound payload schema, the error
//! taxonomy, and the SQLite-backed repository layer. The API crate builds
//! its handlers on top of these foundational types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod storage;

pub use error::{CoreError, Result};
pub use models::{Donation, DonationId, NewDonation};
