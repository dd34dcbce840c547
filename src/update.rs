//! Per-tick animation update.
//!
//! Maps frame time and the current options snapshot to transform and light
//! updates. The rotation and light writes are pure functions of their inputs;
//! the bounce phase accumulator is the single piece of internal state, kept
//! explicit on `AnimationCursor` instead of hiding in a captured variable.

use crate::error::SceneError;
use crate::frame::FrameInfo;
use crate::state::SceneState;
use crate::types::SceneDelta;

/// Peak height of the bounce arc; the bouncer's y always stays in
/// [0, BOUNCE_HEIGHT]
pub const BOUNCE_HEIGHT: f32 = 10.0;

/// Monotonically increasing bounce phase, advanced by `options.speed` once
/// per tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationCursor {
    pub step: f32,
}

#[derive(Debug, Default)]
pub struct FrameUpdater {
    cursor: AnimationCursor,
}

impl FrameUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> AnimationCursor {
        self.cursor
    }

    /// Run one tick over the scene and return the deltas applied.
    ///
    /// The spinner's rotation is an absolute assignment of the frame time,
    /// never an accumulation; re-running a tick with the same time is a
    /// no-op apart from the bounce phase advance.
    pub fn update(
        &mut self,
        frame: FrameInfo,
        state: &mut SceneState,
    ) -> Result<Vec<SceneDelta>, SceneError> {
        let mut deltas = Vec::new();

        if let Some(id) = state.designations.spinner {
            let object = state.get_mut(id)?;
            object.transform.rotation.x = frame.time;
            object.transform.rotation.y = frame.time;
            deltas.push(SceneDelta::Transform {
                id,
                transform: object.transform,
            });
        }

        if let Some(id) = state.designations.bouncer {
            self.cursor.step += state.options.speed;
            let height = BOUNCE_HEIGHT * self.cursor.step.sin().abs();
            let object = state.get_mut(id)?;
            object.transform.position.y = height;
            deltas.push(SceneDelta::Transform {
                id,
                transform: object.transform,
            });
        }

        // Light parameters snap straight to the slider values, no smoothing
        if let Some(light) = state.light.as_mut() {
            light.angle = state.options.angle;
            light.penumbra = state.options.penumbra;
            light.intensity = state.options.intensity;
            deltas.push(SceneDelta::Light {
                angle: light.angle,
                penumbra: light.penumbra,
                intensity: light.intensity,
            });
        }

        Ok(deltas)
    }
}
