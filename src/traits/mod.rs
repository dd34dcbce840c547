//! Seams to the excluded surrounding system: the render-loop driver, the
//! ray-intersection service, the control surface, the renderer and the asset
//! loader. The core only ever talks to these traits; the bundled
//! implementations exist so the demo binary and the tests can run without an
//! engine.

pub mod control;
pub mod frame;
pub mod loader;
pub mod ray_intersect;
pub mod renderer;

pub use control::*;
pub use frame::*;
pub use loader::*;
pub use ray_intersect::*;
pub use renderer::*;
