use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::types::Color;

pub const SPEED_RANGE: (f32, f32) = (0.0, 0.1);
pub const ANGLE_RANGE: (f32, f32) = (0.0, 1.0);
pub const PENUMBRA_RANGE: (f32, f32) = (0.0, 1.0);
pub const INTENSITY_RANGE: (f32, f32) = (0.0, 500.0);

/// The mutable bag of animation parameters edited by the control surface and
/// read once per tick.
///
/// Writes and reads are both confined to the tick context, so a tick always
/// sees a settled snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationOptions {
    pub sphere_color: Color,
    pub wireframe: bool,
    pub speed: f32,
    pub angle: f32,
    pub penumbra: f32,
    pub intensity: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            // 0xFFEA00
            sphere_color: [1.0, 234.0 / 255.0, 0.0],
            wireframe: false,
            speed: 0.01,
            angle: 0.2,
            penumbra: 0.0,
            intensity: 1.0,
        }
    }
}

/// A value supplied by the control surface for one named option
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionValue {
    Float(f32),
    Bool(bool),
    Color(Color),
}

impl AnimationOptions {
    /// Apply one named edit. Unknown names, wrong value types and
    /// out-of-range values are rejected without touching the current value.
    pub fn set(&mut self, name: &str, value: OptionValue) -> Result<(), SceneError> {
        match (name, value) {
            ("sphere_color", OptionValue::Color(color)) => self.sphere_color = color,
            ("wireframe", OptionValue::Bool(flag)) => self.wireframe = flag,
            ("speed", OptionValue::Float(v)) => self.speed = in_range(name, v, SPEED_RANGE)?,
            ("angle", OptionValue::Float(v)) => self.angle = in_range(name, v, ANGLE_RANGE)?,
            ("penumbra", OptionValue::Float(v)) => {
                self.penumbra = in_range(name, v, PENUMBRA_RANGE)?
            }
            ("intensity", OptionValue::Float(v)) => {
                self.intensity = in_range(name, v, INTENSITY_RANGE)?
            }
            ("sphere_color" | "wireframe" | "speed" | "angle" | "penumbra" | "intensity", other) => {
                return Err(SceneError::InvalidOption {
                    name: name.to_string(),
                    reason: format!("wrong value type {other:?}"),
                });
            }
            (unknown, _) => {
                return Err(SceneError::InvalidOption {
                    name: unknown.to_string(),
                    reason: "unrecognized option name".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn in_range(name: &str, value: f32, (lo, hi): (f32, f32)) -> Result<f32, SceneError> {
    // NaN fails the containment check and is rejected with the same error
    if (lo..=hi).contains(&value) {
        Ok(value)
    } else {
        Err(SceneError::InvalidOption {
            name: name.to_string(),
            reason: format!("value {value} outside [{lo}, {hi}]"),
        })
    }
}
