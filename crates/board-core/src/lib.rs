//! # board-core
//!
//! Core types for the driftboard storefront.
//!
//! This crate provides:
//! - `FinishOption` and `FinishCatalog` for the customizer catalog
//! - `Theme`, `ThemeTable`, and `DisplayState` for derived display state
//! - `PurchaseSession` for the checkout flow
//! - `StoreError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use board_core::{FinishCatalog, ThemeTable};
//!
//! // Load the catalog shipped with the page
//! let catalog = FinishCatalog::from_toml(include_str!("../../config/finishes.toml"))?;
//!
//! // Derive the theme for the default selection
//! let themes = ThemeTable::from_catalog(&catalog);
//! let theme = themes.theme_for(&catalog.first().unwrap().id);
//! ```

pub mod catalog;
pub mod error;
pub mod session;
pub mod theme;

// Re-exports for convenience
pub use catalog::{FinishCatalog, FinishOption};
pub use error::{StoreError, StoreResult};
pub use session::PurchaseSession;
pub use theme::{marquee_label, Backdrop, DisplayState, Theme, ThemeTable, MARQUEE_REPEATS};
