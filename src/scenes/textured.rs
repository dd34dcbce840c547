use glam::Vec3;

use super::common::SceneBuilder;
use super::lit_sphere_builder;
use crate::state::SceneState;
use crate::types::{Fog, Material, Shape, Transform};

/// Texture path handed opaquely to the external engine
const BOX_TEXTURE: &str = "assets/nebula.jpg";

/// Third stage: environment dressing. A linear fog, a background color and a
/// textured box floating above the plane; the tag wires it up for the picking
/// stage. External model geometry arrives separately through the asset
/// loader seam.
pub fn create_textured_scene() -> SceneState {
    textured_builder().build()
}

pub(crate) fn textured_builder() -> SceneBuilder {
    let mut builder = lit_sphere_builder();

    // 0xFFEA00
    builder.set_background([1.0, 234.0 / 255.0, 0.0]);
    builder.set_fog(Fog {
        color: [1.0, 1.0, 1.0],
        near: 0.0,
        far: 200.0,
    });

    builder.add(
        "theBox",
        Shape::Cube { size: 4.0 },
        Transform::at(Vec3::new(0.0, 15.0, 10.0)),
        Material {
            color: [1.0, 1.0, 1.0],
            wireframe: false,
            texture: Some(BOX_TEXTURE.to_string()),
        },
    );

    builder
}
