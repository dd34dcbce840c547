mod common;
mod lit_sphere;
mod picking;
mod spinning_cube;
mod textured;

pub use common::SceneBuilder;
pub use lit_sphere::create_lit_sphere_scene;
pub use picking::create_picking_scene;
pub use spinning_cube::create_spinning_cube_scene;
pub use textured::create_textured_scene;

pub(crate) use lit_sphere::lit_sphere_builder;
pub(crate) use spinning_cube::spinning_cube_builder;
pub(crate) use textured::textured_builder;
