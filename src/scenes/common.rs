use glam::Vec3;

use crate::state::{Designations, SceneState};
use crate::types::{
    AnimatableObject, Color, Environment, Fog, Material, ObjectId, Shape, SpotLight, Transform,
};

/// Incremental scene construction with sequential id allocation.
///
/// Each `add_*` call registers one object and returns its id so the caller
/// can wire designations.
pub struct SceneBuilder {
    state: SceneState,
    next_id: u32,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            state: SceneState::new(),
            next_id: 0,
        }
    }

    pub fn add(
        &mut self,
        tag: &str,
        shape: Shape,
        transform: Transform,
        material: Material,
    ) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.state.register(AnimatableObject {
            id,
            tag: tag.to_string(),
            shape,
            transform,
            material,
        })
    }

    pub fn add_axes_helper(&mut self, size: f32) -> ObjectId {
        self.add(
            "axes",
            Shape::AxesHelper { size },
            Transform::default(),
            Material::flat([1.0, 1.0, 1.0]),
        )
    }

    pub fn add_grid_helper(&mut self, size: f32, divisions: u32) -> ObjectId {
        self.add(
            "grid",
            Shape::GridHelper { size, divisions },
            Transform::default(),
            Material::flat([0.5, 0.5, 0.5]),
        )
    }

    pub fn add_cube(&mut self, tag: &str, size: f32, color: Color, position: Vec3) -> ObjectId {
        self.add(
            tag,
            Shape::Cube { size },
            Transform::at(position),
            Material::flat(color),
        )
    }

    pub fn add_plane(&mut self, width: f32, depth: f32, color: Color) -> ObjectId {
        self.add(
            "plane",
            Shape::Plane { width, depth },
            Transform::default(),
            Material::flat(color),
        )
    }

    pub fn add_sphere(&mut self, radius: f32, color: Color, position: Vec3) -> ObjectId {
        self.add(
            "sphere",
            Shape::Sphere { radius },
            Transform::at(position),
            Material::flat(color),
        )
    }

    pub fn set_light(&mut self, light: SpotLight) {
        self.state.light = Some(light);
    }

    pub fn set_background(&mut self, color: Color) {
        self.state.environment.background = color;
    }

    pub fn set_fog(&mut self, fog: Fog) {
        self.state.environment.fog = Some(fog);
    }

    pub fn set_environment(&mut self, environment: Environment) {
        self.state.environment = environment;
    }

    pub fn designations_mut(&mut self) -> &mut Designations {
        &mut self.state.designations
    }

    pub fn options_mut(&mut self) -> &mut crate::options::AnimationOptions {
        &mut self.state.options
    }

    pub fn build(self) -> SceneState {
        self.state
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
