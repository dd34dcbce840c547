use scene_loop::error::SceneError;
use scene_loop::options::{AnimationOptions, OptionValue};
use scene_loop::scenes::SceneBuilder;

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn test_speed_below_range_is_rejected() {
        let mut options = AnimationOptions::default();
        let before = options.speed;

        let err = options.set("speed", OptionValue::Float(-1.0)).unwrap_err();
        assert!(
            matches!(err, SceneError::InvalidOption { ref name, .. } if name == "speed"),
            "expected InvalidOption for speed, got {err:?}"
        );
        assert_eq!(options.speed, before, "prior value must be retained");
    }

    #[test]
    fn test_speed_above_range_is_rejected() {
        let mut options = AnimationOptions::default();
        assert!(options.set("speed", OptionValue::Float(1.0)).is_err());
        assert_eq!(options.speed, AnimationOptions::default().speed);
    }

    #[test]
    fn test_speed_inside_range_is_accepted() {
        let mut options = AnimationOptions::default();
        options.set("speed", OptionValue::Float(0.05)).unwrap();
        assert_eq!(options.speed, 0.05);
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let mut options = AnimationOptions::default();
        let err = options
            .set("shininess", OptionValue::Float(0.5))
            .unwrap_err();
        assert!(matches!(err, SceneError::InvalidOption { ref name, .. } if name == "shininess"));
    }

    #[test]
    fn test_wrong_value_type_is_rejected() {
        let mut options = AnimationOptions::default();
        assert!(options.set("wireframe", OptionValue::Float(1.0)).is_err());
        assert!(options.set("speed", OptionValue::Bool(true)).is_err());
        assert!(options
            .set("sphere_color", OptionValue::Float(0.5))
            .is_err());
        assert_eq!(options, AnimationOptions::default());
    }

    #[test]
    fn test_angle_and_penumbra_share_the_unit_range() {
        let mut options = AnimationOptions::default();
        for name in ["angle", "penumbra"] {
            options.set(name, OptionValue::Float(0.0)).unwrap();
            options.set(name, OptionValue::Float(1.0)).unwrap();
            assert!(options.set(name, OptionValue::Float(1.01)).is_err());
            assert!(options.set(name, OptionValue::Float(-0.01)).is_err());
        }
    }

    #[test]
    fn test_intensity_range_is_wide() {
        let mut options = AnimationOptions::default();
        options.set("intensity", OptionValue::Float(500.0)).unwrap();
        assert!(options.set("intensity", OptionValue::Float(500.1)).is_err());
        assert_eq!(options.intensity, 500.0);
    }

    #[test]
    fn test_color_edit_is_applied() {
        let mut options = AnimationOptions::default();
        options
            .set("sphere_color", OptionValue::Color([0.1, 0.2, 0.3]))
            .unwrap();
        assert_eq!(options.sphere_color, [0.1, 0.2, 0.3]);
    }
}

#[cfg(test)]
mod state_application_tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_sphere_color_edit_recolors_the_designated_sphere() {
        let mut builder = SceneBuilder::new();
        let sphere = builder.add_sphere(4.0, [0.0, 0.0, 1.0], Vec3::new(-10.0, 10.0, 0.0));
        builder.designations_mut().pick_sphere = Some(sphere);
        let mut state = builder.build();

        state
            .set_option("sphere_color", OptionValue::Color([0.9, 0.1, 0.1]))
            .unwrap();
        assert_eq!(state.get(sphere).unwrap().material.color, [0.9, 0.1, 0.1]);
    }

    #[test]
    fn test_numeric_edit_does_not_touch_materials() {
        let mut builder = SceneBuilder::new();
        let sphere = builder.add_sphere(4.0, [0.0, 0.0, 1.0], Vec3::ZERO);
        builder.designations_mut().pick_sphere = Some(sphere);
        let mut state = builder.build();
        let before = state.get(sphere).unwrap().material.clone();

        state.set_option("speed", OptionValue::Float(0.02)).unwrap();
        assert_eq!(state.get(sphere).unwrap().material, before);
    }

    #[test]
    fn test_rejected_edit_leaves_state_fully_unchanged() {
        let mut builder = SceneBuilder::new();
        let sphere = builder.add_sphere(4.0, [0.0, 0.0, 1.0], Vec3::ZERO);
        builder.designations_mut().pick_sphere = Some(sphere);
        let mut state = builder.build();
        let options_before = state.options.clone();
        let material_before = state.get(sphere).unwrap().material.clone();

        assert!(state
            .set_option("intensity", OptionValue::Float(-5.0))
            .is_err());
        assert_eq!(state.options, options_before);
        assert_eq!(state.get(sphere).unwrap().material, material_before);
    }
}
