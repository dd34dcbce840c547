//! scene-loop
//!
//! A frame-driven animation core for an interactive 3D scene: a registry of
//! animatable objects, a per-tick updater mapping wall-clock time and a
//! mutable options bag to transform and light updates, and a pick dispatcher
//! reacting to ray hits under the pointer. Rendering, asset parsing and exact
//! intersection belong to an external engine reached through the seams in
//! [`traits`]; the bundled [`intersect::ShapeIntersector`] and
//! [`traits::NullRenderer`] are demo-grade stand-ins.
//!
//! Modules
//! - `camera`: perspective parameters and pointer-ray unprojection
//! - `frame`: frame timing sources (wall clock and scripted)
//! - `intersect`: bundled shape-bounds implementation of the pick seam
//! - `math`: ray primitives
//! - `pick`: pointer-pick reactions
//! - `scenes`: the four incremental stage constructors
//! - `session`: lifecycle and the per-tick pipeline
//! - `state`: scene registry, designations, options, light, environment
//! - `traits`: external collaborator seams
//! - `update`: the per-tick animation update
//! - `window`: winit event-loop adapter

pub mod camera;
pub mod cli;
pub mod error;
pub mod frame;
pub mod intersect;
pub mod math;
pub mod options;
pub mod pick;
pub mod scenes;
pub mod session;
pub mod state;
pub mod traits;
pub mod types;
pub mod update;
pub mod window;

// Re-export the scene constructors for downstream code
pub use scenes::{
    create_lit_sphere_scene, create_picking_scene, create_spinning_cube_scene,
    create_textured_scene,
};
