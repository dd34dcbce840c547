use crate::math::Ray;
use crate::state::SceneState;
use crate::types::PickHit;

/// Ray-intersection service abstraction.
///
/// A pure query: no mutation, may return empty. Implementations must return
/// hits sorted by ascending distance from the ray origin; the dispatcher
/// relies on that order.
pub trait RayIntersect {
    fn pick(&self, ray: &Ray, state: &SceneState) -> Vec<PickHit>;
}
