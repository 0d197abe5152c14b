//! # Themes and Display State
//!
//! Derived display state for the customizer: the background treatment and
//! accent color keyed off the selected finish, and the oversized marquee
//! label rendered behind the 3D scene.

use crate::catalog::FinishCatalog;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How many times the finish name repeats in the marquee strip
pub const MARQUEE_REPEATS: usize = 6;

/// Background treatment while a finish is selected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backdrop {
    #[default]
    Light,
    Dark,
}

/// Visual theme derived from the selected finish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Background treatment
    pub backdrop: Backdrop,
    /// Accent color (hex)
    pub accent: String,
}

impl Theme {
    pub fn new(backdrop: Backdrop, accent: impl Into<String>) -> Self {
        Self {
            backdrop,
            accent: accent.into(),
        }
    }

    /// Neutral theme used for any id missing from the table.
    ///
    /// The catalog is closed, so this only guards a future finish being added
    /// without a theme entry; unmatched ids must not fail.
    pub fn fallback() -> Self {
        Self::new(Backdrop::Light, "#1a1a2e")
    }
}

/// Exhaustive finish-id to theme mapping with one explicit fallback entry
#[derive(Debug, Clone)]
pub struct ThemeTable {
    entries: HashMap<String, Theme>,
    fallback: Theme,
}

impl ThemeTable {
    /// Build the table from the catalog, one entry per finish
    pub fn from_catalog(catalog: &FinishCatalog) -> Self {
        let entries = catalog
            .finishes
            .iter()
            .map(|f| (f.id.clone(), Theme::new(f.backdrop, f.accent_color.clone())))
            .collect();

        Self {
            entries,
            fallback: Theme::fallback(),
        }
    }

    /// Theme for a finish id, falling back to the neutral theme
    pub fn theme_for(&self, id: &str) -> &Theme {
        self.entries.get(id).unwrap_or(&self.fallback)
    }

    /// Number of mapped finishes (excluding the fallback)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no mapped finishes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derived display state for the current selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Display name of the selected finish
    pub name: String,
    /// Repeated label strip built from the name
    pub marquee: String,
    /// Theme for the selected finish
    pub theme: Theme,
}

/// Build the repeated marquee strip from a finish name
pub fn marquee_label(name: &str) -> String {
    vec![name.to_uppercase(); MARQUEE_REPEATS].join(" ")
}
