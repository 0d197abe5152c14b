//! # Finish Customizer
//!
//! Selection state machine for the 3D finish customizer. One instance owns
//! the selection state exclusively; the renderer only receives targets and
//! delivers a completion signal, it never mutates selection directly.
//!
//! The transition lock is a single flag, set synchronously with an accepted
//! selection and cleared only by the renderer's completion signal, never by a
//! timer. A renderer that stalls forever therefore blocks further selection
//! until the page reloads; no recovery timeout is defined.

use crate::renderer::SceneRenderer;
use board_core::{marquee_label, DisplayState, FinishCatalog, StoreError, StoreResult, ThemeTable};
use tracing::{debug, warn};

/// The customizer state machine
pub struct Customizer<R> {
    catalog: FinishCatalog,
    themes: ThemeTable,
    renderer: R,
    selected_id: String,
    in_transition: bool,
}

impl<R: SceneRenderer> Customizer<R> {
    /// Create a customizer over a catalog and a scene renderer.
    ///
    /// Selection defaults to the catalog's first entry. Fails on an empty
    /// catalog or duplicate ids.
    pub fn new(catalog: FinishCatalog, renderer: R) -> StoreResult<Self> {
        catalog.validate()?;

        let selected_id = catalog
            .first()
            .map(|f| f.id.clone())
            .ok_or_else(|| StoreError::Configuration("finish catalog is empty".to_string()))?;
        let themes = ThemeTable::from_catalog(&catalog);

        Ok(Self {
            catalog,
            themes,
            renderer,
            selected_id,
            in_transition: false,
        })
    }

    /// Handle a selection from the control surface.
    ///
    /// Dropped while a transition is in flight (no queueing); a no-op for the
    /// already-selected finish and for ids not in the catalog. An accepted
    /// selection sets the lock, moves `selected_id`, and hands the target to
    /// the renderer, all synchronously within this call.
    pub fn select(&mut self, option_id: &str) {
        if self.in_transition {
            debug!(option_id, "selection dropped, transition in flight");
            return;
        }
        if option_id == self.selected_id {
            debug!(option_id, "finish already selected");
            return;
        }
        if !self.catalog.contains(option_id) {
            warn!(option_id, "unknown finish id ignored");
            return;
        }

        self.in_transition = true;
        self.selected_id = option_id.to_string();
        self.renderer.begin_transition(option_id);
    }

    /// Completion signal from the renderer; unlocks selection.
    ///
    /// Duplicate or late signals are no-ops.
    pub fn on_transition_complete(&mut self) {
        if !self.in_transition {
            debug!("duplicate or late completion signal ignored");
            return;
        }
        self.in_transition = false;
    }

    /// Derived display state for the current selection
    pub fn current_display(&self) -> DisplayState {
        let name = self
            .catalog
            .get(&self.selected_id)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| self.selected_id.clone());

        DisplayState {
            marquee: marquee_label(&name),
            theme: self.themes.theme_for(&self.selected_id).clone(),
            name,
        }
    }

    /// Currently selected finish id
    pub fn selected_id(&self) -> &str {
        &self.selected_id
    }

    /// Whether a visual transition is in flight
    pub fn is_transitioning(&self) -> bool {
        self.in_transition
    }

    /// The catalog this customizer was built over
    pub fn catalog(&self) -> &FinishCatalog {
        &self.catalog
    }

    /// The renderer boundary (read access, for UI glue and tests)
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
