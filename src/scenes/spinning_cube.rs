use glam::Vec3;

use super::common::SceneBuilder;
use crate::state::SceneState;

/// First stage: a green cube spinning over a white plane, with axes and grid
/// helpers for orientation. The cube is the designated spinner.
pub fn create_spinning_cube_scene() -> SceneState {
    spinning_cube_builder().build()
}

pub(crate) fn spinning_cube_builder() -> SceneBuilder {
    let mut builder = SceneBuilder::new();

    builder.add_axes_helper(3.0);

    // 0x00FF00
    let cube = builder.add_cube("cube", 1.0, [0.0, 1.0, 0.0], Vec3::ZERO);
    builder.designations_mut().spinner = Some(cube);

    builder.add_plane(30.0, 30.0, [1.0, 1.0, 1.0]);
    builder.add_grid_helper(30.0, 30);

    builder
}
