//! # Checkout Configuration
//!
//! Configuration for the purchase endpoint. The product identifier is fixed
//! here rather than taken from user input, so the page cannot be made to
//! purchase something else.

use board_core::{StoreError, StoreResult};
use std::env;

/// Purchase endpoint configuration
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Base URL of the purchase endpoint (e.g., "https://shop.driftboard.io")
    pub base_url: String,

    /// Fixed product identifier (e.g., "driftboard-classic")
    pub product_id: String,
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `DRIFTBOARD_CHECKOUT_URL`
    /// - `DRIFTBOARD_PRODUCT_ID`
    pub fn from_env() -> StoreResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let base_url = env::var("DRIFTBOARD_CHECKOUT_URL").map_err(|_| {
            StoreError::Configuration("DRIFTBOARD_CHECKOUT_URL not set".to_string())
        })?;

        let product_id = env::var("DRIFTBOARD_PRODUCT_ID").map_err(|_| {
            StoreError::Configuration("DRIFTBOARD_PRODUCT_ID not set".to_string())
        })?;

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(StoreError::Configuration(
                "DRIFTBOARD_CHECKOUT_URL must start with http:// or https://".to_string(),
            ));
        }

        if !is_valid_product_id(&product_id) {
            return Err(StoreError::Configuration(format!(
                "DRIFTBOARD_PRODUCT_ID is not a valid product id: {product_id}"
            )));
        }

        Ok(Self::new(base_url, product_id))
    }

    /// Create config with explicit values (for testing)
    pub fn new(base_url: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            product_id: product_id.into(),
        }
    }

    /// Builder: set a custom base URL (for testing)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Full URL of the session-creating endpoint for the configured product
    pub fn checkout_url(&self) -> String {
        format!("{}/api/checkout/{}", self.base_url, self.product_id)
    }
}

/// Validate a product id: non-empty slug of alphanumerics, `-` and `_`
pub fn is_valid_product_id(product_id: &str) -> bool {
    !product_id.is_empty()
        && product_id.len() <= 100
        && product_id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}
