use glam::Vec3;

use super::common::SceneBuilder;
use super::spinning_cube_builder;
use crate::state::SceneState;
use crate::types::SpotLight;

/// Second stage: adds the bouncing sphere and the spot light whose angle,
/// penumbra and intensity track the animation options.
pub fn create_lit_sphere_scene() -> SceneState {
    lit_sphere_builder().build()
}

pub(crate) fn lit_sphere_builder() -> SceneBuilder {
    let mut builder = spinning_cube_builder();

    // 0x0000FF
    let sphere = builder.add_sphere(4.0, [0.0, 0.0, 1.0], Vec3::new(-10.0, 10.0, 0.0));
    builder.designations_mut().bouncer = Some(sphere);
    builder.designations_mut().pick_sphere = Some(sphere);

    builder.set_light(SpotLight {
        position: Vec3::new(-100.0, 100.0, 0.0),
        color: [1.0, 1.0, 1.0],
        angle: 0.2,
        penumbra: 0.0,
        intensity: 1.0,
        cast_shadow: true,
    });

    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_serves_both_roles() {
        let state = create_lit_sphere_scene();
        assert_eq!(state.designations.bouncer, state.designations.pick_sphere);
        assert!(state.light.is_some());
        assert!(state.validate_designations().is_ok());
    }

    #[test]
    fn light_starts_at_the_option_defaults() {
        let state = create_lit_sphere_scene();
        let light = state.light.as_ref().unwrap();
        assert_eq!(light.angle, state.options.angle);
        assert_eq!(light.penumbra, state.options.penumbra);
        assert_eq!(light.intensity, state.options.intensity);
    }
}
