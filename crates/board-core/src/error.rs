//! # Store Error Types
//!
//! Typed error handling for the driftboard storefront.
//! Every failure of a purchase invocation is normalized into one of these
//! variants at the checkout client boundary; none escape as panics.

use thiserror::Error;

/// Core error type for storefront operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration errors (missing env vars, invalid catalog)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure, no response was received
    #[error("Network error: {0}")]
    Network(String),

    /// The purchase endpoint answered with a non-success status
    #[error("Checkout rejected: {detail}")]
    ServerRejected { detail: String },

    /// Success status but the body was not usable structured data
    #[error("Malformed checkout response: {0}")]
    MalformedResponse(String),

    /// Valid structured response with no redirect target to navigate to
    #[error("no checkout url in response")]
    MissingRedirect,
}

impl StoreError {
    /// Stable tag for structured logs and diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Configuration(_) => "configuration",
            StoreError::Network(_) => "network",
            StoreError::ServerRejected { .. } => "server_rejected",
            StoreError::MalformedResponse(_) => "malformed_response",
            StoreError::MissingRedirect => "missing_redirect",
        }
    }

    /// The raw diagnostic detail carried by this error
    pub fn detail(&self) -> String {
        match self {
            StoreError::Configuration(detail)
            | StoreError::Network(detail)
            | StoreError::MalformedResponse(detail) => detail.clone(),
            StoreError::ServerRejected { detail } => detail.clone(),
            StoreError::MissingRedirect => "no checkout url in response".to_string(),
        }
    }

    /// The single human-readable alert string shown to the shopper.
    ///
    /// Every failure is terminal for its invocation; the shopper retries by
    /// clicking again, so all messages invite a retry.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Configuration(detail) => {
                format!("The store is misconfigured ({detail}).")
            }
            StoreError::Network(detail) => format!(
                "Could not reach checkout ({detail}). Please check your connection and try again."
            ),
            StoreError::ServerRejected { detail } => {
                format!("Checkout was rejected ({detail}). Please try again.")
            }
            StoreError::MalformedResponse(_) | StoreError::MissingRedirect => format!(
                "Checkout returned an unexpected response ({}). Please try again in a moment.",
                self.detail()
            ),
        }
    }

    /// HTTP status code appropriate for this error when surfaced by a server
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::Configuration(_) => 500,
            StoreError::Network(_) => 503,
            StoreError::ServerRejected { .. } => 502,
            StoreError::MalformedResponse(_) => 502,
            StoreError::MissingRedirect => 502,
        }
    }
}

/// Result type alias for storefront operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(StoreError::Network("timeout".into()).kind(), "network");
        assert_eq!(
            StoreError::ServerRejected {
                detail: "500 Internal Server Error: boom".into()
            }
            .kind(),
            "server_rejected"
        );
        assert_eq!(StoreError::MissingRedirect.kind(), "missing_redirect");
    }

    #[test]
    fn test_detail_preserved() {
        let err = StoreError::ServerRejected {
            detail: "500 Internal Server Error: boom".into(),
        };
        assert_eq!(err.detail(), "500 Internal Server Error: boom");
        assert_eq!(
            StoreError::MissingRedirect.detail(),
            "no checkout url in response"
        );
    }

    #[test]
    fn test_user_message_carries_detail() {
        let err = StoreError::Network("dns failure".into());
        assert!(err.user_message().contains("dns failure"));

        let err = StoreError::MalformedResponse("unexpected content type: <html>".into());
        assert!(err.user_message().contains("unexpected content type"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(StoreError::Configuration("x".into()).status_code(), 500);
        assert_eq!(StoreError::Network("x".into()).status_code(), 503);
        assert_eq!(StoreError::MissingRedirect.status_code(), 502);
    }
}
