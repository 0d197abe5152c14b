//! # Purchase Trigger
//!
//! The one-click purchase affordance. Wraps [`CheckoutClient`] and serializes
//! repeated activation: the control is disabled while one request is
//! outstanding and re-enabled unconditionally when it settles, so a failed
//! attempt stays retryable.
//!
//! This flag is independent of the customizer's transition lock; the two
//! mechanisms share no state.

use crate::client::CheckoutClient;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info};

/// Page-side effects of a purchase attempt.
///
/// Kept behind a trait so the flow is testable without a browser; the WASM
/// embedding navigates and alerts through the DOM.
pub trait PurchaseSurface: Send + Sync {
    /// Navigate the page to the hosted payment URL
    fn navigate(&self, url: &str);

    /// Show a human-readable failure message
    fn alert(&self, message: &str);
}

/// One-click purchase trigger
pub struct PurchaseTrigger<S> {
    client: CheckoutClient,
    surface: S,
    busy: AtomicBool,
}

impl<S: PurchaseSurface> PurchaseTrigger<S> {
    /// Create a trigger over a client and a page surface
    pub fn new(client: CheckoutClient, surface: S) -> Self {
        Self {
            client,
            surface,
            busy: AtomicBool::new(false),
        }
    }

    /// Whether a purchase request is currently outstanding
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Handle one activation of the purchase control.
    ///
    /// Activations while a request is outstanding are dropped, not queued.
    pub async fn activate(&self) {
        if self.busy.swap(true, Ordering::SeqCst) {
            debug!("purchase already in flight, activation dropped");
            return;
        }

        match self.client.initiate_purchase().await {
            Ok(session) => {
                info!(url = %session.checkout_url, "redirecting to checkout");
                self.surface.navigate(&session.checkout_url);
            }
            Err(err) => {
                error!(kind = err.kind(), detail = %err.detail(), "purchase failed");
                self.surface.alert(&err.user_message());
            }
        }

        self.busy.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckoutConfig;
    use std::sync::Mutex;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Default)]
    struct RecordingSurface {
        navigations: Mutex<Vec<String>>,
        alerts: Mutex<Vec<String>>,
    }

    impl PurchaseSurface for RecordingSurface {
        fn navigate(&self, url: &str) {
            self.navigations.lock().unwrap().push(url.to_string());
        }

        fn alert(&self, message: &str) {
            self.alerts.lock().unwrap().push(message.to_string());
        }
    }

    fn trigger_for(server: &MockServer) -> PurchaseTrigger<RecordingSurface> {
        let client = CheckoutClient::new(CheckoutConfig::new(server.uri(), "driftboard-classic"));
        PurchaseTrigger::new(client, RecordingSurface::default())
    }

    #[tokio::test]
    async fn test_redirect_on_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/checkout/driftboard-classic"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"url":"https://pay.example/session/abc"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let trigger = trigger_for(&server);
        trigger.activate().await;

        assert_eq!(
            *trigger.surface.navigations.lock().unwrap(),
            vec!["https://pay.example/session/abc".to_string()]
        );
        assert!(trigger.surface.alerts.lock().unwrap().is_empty());
        assert!(!trigger.is_busy());
    }

    #[tokio::test]
    async fn test_alert_on_failure_then_retryable() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/checkout/driftboard-classic"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        let trigger = trigger_for(&server);
        trigger.activate().await;

        {
            let alerts = trigger.surface.alerts.lock().unwrap();
            assert_eq!(alerts.len(), 1);
            assert!(alerts[0].contains("500 Internal Server Error: boom"));
        }
        assert!(trigger.surface.navigations.lock().unwrap().is_empty());
        assert!(!trigger.is_busy());

        // The control re-enabled; a later activation goes through
        Mock::given(method("POST"))
            .and(path("/api/checkout/driftboard-classic"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"url":"https://pay.example/session/retry"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        trigger.activate().await;
        assert_eq!(trigger.surface.navigations.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_activation_dropped() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/checkout/driftboard-classic"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(
                        r#"{"url":"https://pay.example/session/abc"}"#,
                        "application/json",
                    )
                    .set_delay(Duration::from_millis(100)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let trigger = trigger_for(&server);
        // The first future flips the busy flag before its network await; the
        // second sees it and returns immediately.
        tokio::join!(trigger.activate(), trigger.activate());

        assert_eq!(trigger.surface.navigations.lock().unwrap().len(), 1);
        assert!(!trigger.is_busy());
    }
}
