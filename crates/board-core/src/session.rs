//! # Purchase Session
//!
//! A purchase session is a server-issued context for an initiated but
//! not-yet-completed payment, identified by the redirect URL the page
//! navigates to. The checkout client produces exactly one of a session or a
//! [`StoreError`](crate::StoreError) per invocation, never both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchase session created by the purchase endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseSession {
    /// URL of the hosted payment page; non-empty by construction
    pub checkout_url: String,

    /// Product the session was created for (fixed by configuration)
    pub product_id: String,

    /// When the session was received
    pub created_at: DateTime<Utc>,
}

impl PurchaseSession {
    /// Create a session with the current timestamp
    pub fn new(checkout_url: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            checkout_url: checkout_url.into(),
            product_id: product_id.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_fields() {
        let session = PurchaseSession::new("https://pay.example/session/abc", "driftboard-classic");

        assert_eq!(session.checkout_url, "https://pay.example/session/abc");
        assert_eq!(session.product_id, "driftboard-classic");
    }
}
