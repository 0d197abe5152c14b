//! # Renderer Boundary
//!
//! The customizer treats the 3D scene as a black box: it hands a new target
//! finish over and forgets about it, and the scene reports back through
//! [`Customizer::on_transition_complete`](crate::Customizer::on_transition_complete)
//! once its swap animation has finished. Exactly one completion is expected
//! per accepted selection; duplicate or late signals are tolerated as no-ops.

/// Boundary to the external 3D scene
pub trait SceneRenderer {
    /// Start the visual transition toward `option_id` (fire-and-forget)
    fn begin_transition(&mut self, option_id: &str);
}

/// Renderer that records handed-over targets, for tests and headless use
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub targets: Vec<String>,
}

impl SceneRenderer for RecordingRenderer {
    fn begin_transition(&mut self, option_id: &str) {
        self.targets.push(option_id.to_string());
    }
}
