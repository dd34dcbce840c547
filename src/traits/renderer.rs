use crate::camera::Camera;
use crate::state::SceneState;
use crate::types::SceneDelta;

/// External rendering engine seam.
///
/// The session hands over the full state plus the deltas applied this tick;
/// how anything gets on screen is entirely the implementation's business.
pub trait SceneRenderer {
    fn render(
        &mut self,
        state: &SceneState,
        camera: &Camera,
        deltas: &[SceneDelta],
    ) -> Result<(), Box<dyn std::error::Error>>;
}

/// Renderer that draws nothing and traces what it was asked to draw. Used by
/// the headless demo and as a stand-in until an engine is wired up.
#[derive(Debug, Default)]
pub struct NullRenderer {
    frames_rendered: u64,
}

impl NullRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

impl SceneRenderer for NullRenderer {
    fn render(
        &mut self,
        state: &SceneState,
        _camera: &Camera,
        deltas: &[SceneDelta],
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.frames_rendered += 1;
        log::trace!(
            "frame {}: {} objects, {} deltas",
            self.frames_rendered,
            state.len(),
            deltas.len()
        );
        Ok(())
    }
}
