//! # board-checkout
//!
//! One-click purchase flow for the driftboard storefront.
//!
//! Two pieces, layered:
//!
//! 1. **CheckoutClient** - issues the purchase-session request and validates
//!    the response in layers (transport, status, content type, parse,
//!    redirect field), normalizing every failure into a `StoreError`.
//! 2. **PurchaseTrigger** - the buy-button wrapper: drops repeat activations
//!    while a request is outstanding, navigates on success, alerts on
//!    failure, and always re-enables afterwards.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use board_checkout::{CheckoutClient, PurchaseSurface, PurchaseTrigger};
//!
//! let client = CheckoutClient::from_env()?;
//! let trigger = PurchaseTrigger::new(client, page_surface);
//!
//! // Wire to the buy button:
//! trigger.activate().await;
//! ```

pub mod client;
pub mod config;
pub mod trigger;

// Re-exports
pub use client::CheckoutClient;
pub use config::{is_valid_product_id, CheckoutConfig};
pub use trigger::{PurchaseSurface, PurchaseTrigger};
