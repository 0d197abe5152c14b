//! # Purchase Session Client
//!
//! Turns one click into one purchase-session request. The response is
//! validated in layers, with every failure mode normalized into a specific
//! [`StoreError`] variant; nothing escapes this boundary unclassified.
//!
//! The client performs the network call and nothing else: navigation on
//! success and alerting on failure belong to the caller, which keeps this
//! testable without a browser.

use crate::config::CheckoutConfig;
use board_core::{PurchaseSession, StoreError, StoreResult};
use reqwest::{header, Client};
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

/// How much of a non-JSON body is kept as a diagnostic snippet
const BODY_SNIPPET_CHARS: usize = 200;

/// Client for the purchase endpoint
pub struct CheckoutClient {
    config: CheckoutConfig,
    client: Client,
}

impl CheckoutClient {
    /// Create a new checkout client
    pub fn new(config: CheckoutConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> StoreResult<Self> {
        let config = CheckoutConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// The configured product id
    pub fn product_id(&self) -> &str {
        &self.config.product_id
    }

    /// Create a purchase session for the configured product.
    ///
    /// Each check short-circuits with a terminal error; there is no automatic
    /// retry. The caller may re-invoke on a subsequent user action.
    #[instrument(skip(self), fields(product_id = %self.config.product_id))]
    pub async fn initiate_purchase(&self) -> StoreResult<PurchaseSession> {
        let url = self.config.checkout_url();
        debug!("creating purchase session: {}", url);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Best-effort diagnostic body; empty if unreadable
            let body = response.text().await.unwrap_or_default();
            error!("purchase endpoint rejected request: status={}, body={}", status, body);
            return Err(StoreError::ServerRejected {
                detail: format!("{status}: {body}"),
            });
        }

        // An HTML error page with a 200 would crash JSON parsing below, so the
        // declared content type is checked before the body is touched.
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !is_json_content_type(&content_type) {
            let snippet: String = body.chars().take(BODY_SNIPPET_CHARS).collect();
            error!("unexpected content type from purchase endpoint: {}", content_type);
            return Err(StoreError::MalformedResponse(format!(
                "unexpected content type: {snippet}"
            )));
        }

        let payload: SessionResponse = serde_json::from_str(&body)
            .map_err(|e| StoreError::MalformedResponse(e.to_string()))?;

        let redirect = payload.redirect_url().ok_or(StoreError::MissingRedirect)?;

        info!("purchase session created: url={}", redirect);

        Ok(PurchaseSession::new(redirect, &self.config.product_id))
    }
}

/// Check a declared content type against structured-data media types
fn is_json_content_type(value: &str) -> bool {
    let mime = value.split(';').next().unwrap_or("").trim();
    mime == "application/json" || mime.ends_with("+json")
}

// =============================================================================
// Purchase Endpoint Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct SessionResponse {
    #[serde(default)]
    url: Option<String>,
    /// Alias some session providers use for the same field
    #[serde(default)]
    checkout_url: Option<String>,
}

impl SessionResponse {
    /// The usable redirect target, if any; empty strings count as absent
    fn redirect_url(self) -> Option<String> {
        self.url
            .or(self.checkout_url)
            .filter(|u| !u.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PRODUCT_ID: &str = "driftboard-classic";

    fn client_for(server: &MockServer) -> CheckoutClient {
        CheckoutClient::new(CheckoutConfig::new(server.uri(), PRODUCT_ID))
    }

    fn checkout_path() -> String {
        format!("/api/checkout/{PRODUCT_ID}")
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("application/hal+json"));
        assert!(!is_json_content_type("text/html"));
        assert!(!is_json_content_type(""));
    }

    #[tokio::test]
    async fn test_successful_session() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(checkout_path()))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"url":"https://pay.example/session/abc"}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let session = client_for(&server).initiate_purchase().await.unwrap();
        assert_eq!(session.checkout_url, "https://pay.example/session/abc");
        assert_eq!(session.product_id, PRODUCT_ID);
    }

    #[tokio::test]
    async fn test_checkout_url_alias_accepted() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(checkout_path()))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"checkout_url":"https://pay.example/session/xyz"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let session = client_for(&server).initiate_purchase().await.unwrap();
        assert_eq!(session.checkout_url, "https://pay.example/session/xyz");
    }

    #[tokio::test]
    async fn test_server_rejection_carries_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(checkout_path()))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).initiate_purchase().await.unwrap_err();
        match err {
            StoreError::ServerRejected { detail } => {
                assert_eq!(detail, "500 Internal Server Error: boom");
            }
            other => panic!("expected ServerRejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_html_response_is_malformed_with_snippet() {
        let server = MockServer::start().await;

        let long_page = format!("<html>{}</html>", "x".repeat(400));
        Mock::given(method("POST"))
            .and(path(checkout_path()))
            .respond_with(ResponseTemplate::new(200).set_body_raw(long_page.clone(), "text/html"))
            .mount(&server)
            .await;

        let err = client_for(&server).initiate_purchase().await.unwrap_err();
        match err {
            StoreError::MalformedResponse(detail) => {
                assert!(detail.starts_with("unexpected content type: <html>"));
                let snippet = detail.trim_start_matches("unexpected content type: ");
                assert_eq!(snippet.chars().count(), BODY_SNIPPET_CHARS);
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_content_type_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(checkout_path()))
            .respond_with(
                ResponseTemplate::new(200).set_body_bytes(r#"{"url":"https://x"}"#.as_bytes()),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).initiate_purchase().await.unwrap_err();
        assert!(matches!(err, StoreError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(checkout_path()))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("{not json", "application/json"),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).initiate_purchase().await.unwrap_err();
        assert!(matches!(err, StoreError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_missing_url_field() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(checkout_path()))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
            .mount(&server)
            .await;

        let err = client_for(&server).initiate_purchase().await.unwrap_err();
        assert!(matches!(err, StoreError::MissingRedirect));
    }

    #[tokio::test]
    async fn test_empty_url_counts_as_missing() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(checkout_path()))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"{"url":""}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).initiate_purchase().await.unwrap_err();
        assert!(matches!(err, StoreError::MissingRedirect));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        // Nothing listens on the discard port
        let client = CheckoutClient::new(CheckoutConfig::new("http://127.0.0.1:9", PRODUCT_ID));

        let err = client.initiate_purchase().await.unwrap_err();
        assert!(matches!(err, StoreError::Network(_)));
    }
}
