use glam::Vec3;

/// RGB color, linear, each channel in [0, 1]
pub type Color = [f32; 3];

/// Color applied to the tracked sphere when the pointer ray hits it (0xFF0000)
pub const HIGHLIGHT_COLOR: Color = [1.0, 0.0, 0.0];

/// Stable identity of a scene object, assigned once at scene-build time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Geometry kind of an animatable object.
///
/// The external engine owns the actual meshes; these variants carry just
/// enough extent data for the bundled picker to compute world-space bounds.
/// `Model` geometry lives entirely on the engine side and is not pickable
/// by the bundled intersector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Cube { size: f32 },
    Plane { width: f32, depth: f32 },
    Sphere { radius: f32 },
    GridHelper { size: f32, divisions: u32 },
    AxesHelper { size: f32 },
    Model,
}

/// Position plus Euler rotation in radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: Color,
    pub wireframe: bool,
    /// Opaque asset path resolved by the external engine
    pub texture: Option<String>,
}

impl Material {
    pub fn flat(color: Color) -> Self {
        Self {
            color,
            wireframe: false,
            texture: None,
        }
    }
}

/// One renderable, mutable object in the scene registry.
///
/// Created once at build time and mutated every tick; never destroyed
/// during a session.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatableObject {
    pub id: ObjectId,
    pub tag: String,
    pub shape: Shape,
    pub transform: Transform,
    pub material: Material,
}

/// Spot light parameters. `angle`, `penumbra` and `intensity` are overwritten
/// from the animation options on every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub color: Color,
    pub angle: f32,
    pub penumbra: f32,
    pub intensity: f32,
    pub cast_shadow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub background: Color,
    pub fog: Option<Fog>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            background: [0.0, 0.0, 0.0],
            fog: None,
        }
    }
}

/// Latest pointer position in normalized device coordinates.
///
/// Overwritten on every cursor move; a tick reads the last known sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    /// Convert window pixel coordinates to NDC: x right, y up, both in [-1, 1]
    pub fn from_pixels(px: f64, py: f64, width: u32, height: u32) -> Self {
        Self {
            x: (px / width.max(1) as f64 * 2.0 - 1.0) as f32,
            y: (-(py / height.max(1) as f64) * 2.0 + 1.0) as f32,
        }
    }
}

/// One ray-intersection result, distance measured from the camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub id: ObjectId,
    pub distance: f32,
}

/// Per-tick change record handed to the renderer seam
#[derive(Debug, Clone, PartialEq)]
pub enum SceneDelta {
    Transform {
        id: ObjectId,
        transform: Transform,
    },
    Material {
        id: ObjectId,
        color: Color,
        wireframe: bool,
    },
    Light {
        angle: f32,
        penumbra: f32,
        intensity: f32,
    },
}
