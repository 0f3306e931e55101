//! Shared-secret authentication guard.
//!
//! Both inbound surfaces authenticate against a single process-wide
//! secret: the webhook endpoint reads it from a header, the listing
//! endpoint from a query parameter. The guard only answers yes or no;
//! callers decide the HTTP status mapping.

use std::fmt;

/// Process-wide shared secret for authenticating callers.
///
/// Captured once from configuration at startup, immutable afterwards.
/// Comparison is plain string equality.
#[derive(Clone)]
pub struct SharedToken(String);

impl SharedToken {
    /// Creates a guard holding the given secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Returns true when the presented token matches the secret.
    ///
    /// Callers pass a missing credential as the empty string; it never
    /// matches because configuration rejects empty secrets at startup.
    pub fn authorize(&self, presented: &str) -> bool {
        self.0 == presented
    }
}

// The secret must never reach logs or debug output.
impl fmt::Debug for SharedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedToken(***)")
    }
}
