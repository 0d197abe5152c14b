//! # board-customizer
//!
//! Selection state machine for the driftboard 3D finish customizer.
//!
//! The machine owns which finish is selected and whether a visual transition
//! is in flight, exposes `select` as the single mutation entry point, and
//! derives display state (marquee label, theme) at every point in time. The
//! external renderer is a black box behind [`SceneRenderer`]: it receives
//! targets and delivers completion signals, nothing more.
//!
//! ## Example
//!
//! ```rust,ignore
//! use board_core::FinishCatalog;
//! use board_customizer::{Customizer, SceneRenderer};
//!
//! let mut customizer = Customizer::new(catalog, scene)?;
//!
//! customizer.select("charred-ash");          // locks, hands target to scene
//! customizer.select("pacific-maple");        // dropped, transition in flight
//! customizer.on_transition_complete();       // unlocks
//! let display = customizer.current_display();
//! ```

pub mod customizer;
pub mod renderer;

// Re-exports
pub use customizer::Customizer;
pub use renderer::{RecordingRenderer, SceneRenderer};
