//! Bundled implementation of the ray-intersection seam.
//!
//! Demo-grade picking over the shape extents the registry carries: analytic
//! sphere tests, slab tests against world-space bounds for boxes and planes.
//! Rotation is ignored for box bounds; an external engine can supply exact
//! picking through the same trait.

use glam::Vec3;

use crate::math::Ray;
use crate::state::SceneState;
use crate::traits::RayIntersect;
use crate::types::{PickHit, Shape};

/// Thickness used for the plane's slab; planes in the stage scenes lie flat
const PLANE_HALF_THICKNESS: f32 = 1e-3;

#[derive(Debug, Default)]
pub struct ShapeIntersector;

impl ShapeIntersector {
    pub fn new() -> Self {
        Self
    }

    fn distance_to(ray: &Ray, shape: Shape, position: Vec3) -> Option<f32> {
        match shape {
            Shape::Sphere { radius } => ray.sphere_distance(position, radius),
            Shape::Cube { size } => {
                let half = Vec3::splat(size * 0.5);
                ray.aabb_distance(position - half, position + half)
            }
            Shape::Plane { width, depth } => {
                let half = Vec3::new(width * 0.5, PLANE_HALF_THICKNESS, depth * 0.5);
                ray.aabb_distance(position - half, position + half)
            }
            // helper geometry and externally owned models are not pickable here
            Shape::GridHelper { .. } | Shape::AxesHelper { .. } | Shape::Model => None,
        }
    }
}

impl RayIntersect for ShapeIntersector {
    fn pick(&self, ray: &Ray, state: &SceneState) -> Vec<PickHit> {
        let mut hits: Vec<PickHit> = state
            .objects()
            .iter()
            .filter_map(|object| {
                Self::distance_to(ray, object.shape, object.transform.position).map(|distance| {
                    PickHit {
                        id: object.id,
                        distance,
                    }
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnimatableObject, Material, ObjectId, Transform};

    fn scene_with(shapes: &[(u32, Shape, Vec3)]) -> SceneState {
        let mut state = SceneState::new();
        for &(id, shape, position) in shapes {
            state.register(AnimatableObject {
                id: ObjectId(id),
                tag: String::new(),
                shape,
                transform: Transform::at(position),
                material: Material::flat([1.0, 1.0, 1.0]),
            });
        }
        state
    }

    #[test]
    fn hits_come_back_in_ascending_distance_order() {
        let state = scene_with(&[
            (0, Shape::Cube { size: 2.0 }, Vec3::new(0.0, 0.0, -20.0)),
            (1, Shape::Sphere { radius: 1.0 }, Vec3::new(0.0, 0.0, -5.0)),
            (2, Shape::Cube { size: 2.0 }, Vec3::new(0.0, 0.0, -12.0)),
        ]);
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        let hits = ShapeIntersector::new().pick(&ray, &state);
        let ids: Vec<u32> = hits.iter().map(|h| h.id.0).collect();
        assert_eq!(ids, vec![1, 2, 0]);
        assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn helpers_are_never_picked() {
        let state = scene_with(&[
            (0, Shape::GridHelper { size: 30.0, divisions: 30 }, Vec3::ZERO),
            (1, Shape::AxesHelper { size: 3.0 }, Vec3::ZERO),
            (2, Shape::Model, Vec3::ZERO),
        ]);
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), -Vec3::Y);

        assert!(ShapeIntersector::new().pick(&ray, &state).is_empty());
    }

    #[test]
    fn ray_away_from_everything_returns_empty() {
        let state = scene_with(&[(0, Shape::Sphere { radius: 4.0 }, Vec3::new(0.0, 0.0, -10.0))]);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(ShapeIntersector::new().pick(&ray, &state).is_empty());
    }
}
