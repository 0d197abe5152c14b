//! # Finish Catalog
//!
//! Selectable finish options for the 3D customizer.
//! The catalog is loaded once from `config/finishes.toml` and is static for
//! the lifetime of the page.

use crate::error::{StoreError, StoreResult};
use crate::theme::Backdrop;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A selectable finish in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishOption {
    /// Unique, stable key (e.g., "walnut-burl")
    pub id: String,

    /// Display name shown on the page (e.g., "Walnut Burl")
    pub name: String,

    /// Preview texture asset; the primary product asset is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_asset: Option<String>,

    /// Accent color used for the selected-state UI (hex)
    pub accent_color: String,

    /// Background treatment while this finish is selected
    #[serde(default)]
    pub backdrop: Backdrop,
}

impl FinishOption {
    /// Create a finish with the required fields
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        accent_color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            preview_asset: None,
            accent_color: accent_color.into(),
            backdrop: Backdrop::default(),
        }
    }

    /// Builder: set the preview asset
    pub fn with_preview(mut self, asset: impl Into<String>) -> Self {
        self.preview_asset = Some(asset.into());
        self
    }

    /// Builder: set the background treatment
    pub fn with_backdrop(mut self, backdrop: Backdrop) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Preview asset for this finish, falling back to the primary asset
    pub fn preview_asset_or<'a>(&'a self, primary: &'a str) -> &'a str {
        self.preview_asset.as_deref().unwrap_or(primary)
    }
}

/// Finish catalog (loaded from config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinishCatalog {
    pub finishes: Vec<FinishOption>,
}

impl FinishCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            finishes: Vec::new(),
        }
    }

    /// Add a finish to the catalog
    pub fn add(&mut self, finish: FinishOption) {
        self.finishes.push(finish);
    }

    /// Add a finish with builder pattern
    pub fn with_finish(mut self, finish: FinishOption) -> Self {
        self.add(finish);
        self
    }

    /// Find a finish by id
    pub fn get(&self, id: &str) -> Option<&FinishOption> {
        self.finishes.iter().find(|f| f.id == id)
    }

    /// Check whether an id exists in the catalog
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The catalog's first entry, the default selection
    pub fn first(&self) -> Option<&FinishOption> {
        self.finishes.first()
    }

    /// All finish ids
    pub fn ids(&self) -> Vec<&str> {
        self.finishes.iter().map(|f| f.id.as_str()).collect()
    }

    /// Number of finishes
    pub fn len(&self) -> usize {
        self.finishes.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.finishes.is_empty()
    }

    /// Validate catalog invariants: non-empty, ids unique
    pub fn validate(&self) -> StoreResult<()> {
        if self.finishes.is_empty() {
            return Err(StoreError::Configuration(
                "finish catalog is empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for finish in &self.finishes {
            if !seen.insert(finish.id.as_str()) {
                return Err(StoreError::Configuration(format!(
                    "duplicate finish id: {}",
                    finish.id
                )));
            }
        }
        Ok(())
    }

    /// Load and validate a catalog from a TOML string
    pub fn from_toml(toml_str: &str) -> StoreResult<Self> {
        let catalog: Self = toml::from_str(toml_str)
            .map_err(|e| StoreError::Configuration(format!("Failed to parse catalog: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }
}
