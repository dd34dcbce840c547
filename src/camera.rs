use glam::Vec3;

use crate::math::Ray;
use crate::types::PointerSample;

pub const DEFAULT_FOV_Y_DEGREES: f32 = 75.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;

/// Perspective camera: position, look-at target and projection parameters.
///
/// The core only needs it for two things: unprojecting the pointer into a
/// world ray, and tracking the aspect ratio across resizes. View and
/// projection matrices for actual rendering are the engine's business.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            position,
            target,
            fov_y: DEFAULT_FOV_Y_DEGREES.to_radians(),
            aspect,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Viewport resize touches the aspect ratio and nothing else
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Unproject a normalized pointer sample into a world-space ray
    pub fn ray_through(&self, pointer: PointerSample) -> Ray {
        let half_height = (self.fov_y * 0.5).tan();
        let half_width = half_height * self.aspect;

        let dir = self.forward()
            + self.right() * (pointer.x * half_width)
            + self.up() * (pointer.y * half_height);
        Ray::new(self.position, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_changes_only_aspect() {
        let mut camera = Camera::new(Vec3::new(-10.0, 30.0, 30.0), Vec3::ZERO, 800.0 / 600.0);
        let before = camera.clone();

        camera.resize(1920, 1080);

        assert!((camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        assert_eq!(camera.position, before.position);
        assert_eq!(camera.target, before.target);
        assert_eq!(camera.fov_y, before.fov_y);
        assert_eq!(camera.near, before.near);
        assert_eq!(camera.far, before.far);
    }

    #[test]
    fn zero_sized_resize_is_ignored() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::Z, 1.0);
        camera.resize(0, 0);
        assert_eq!(camera.aspect, 1.0);
    }

    #[test]
    fn center_pointer_looks_straight_ahead() {
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 1.5);
        let ray = camera.ray_through(PointerSample { x: 0.0, y: 0.0 });
        assert!((ray.dir - camera.forward()).length() < 1e-6);
    }

    #[test]
    fn pointer_right_of_center_bends_the_ray_right() {
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 1.0);
        let ray = camera.ray_through(PointerSample { x: 0.5, y: 0.0 });
        assert!(ray.dir.dot(camera.right()) > 0.0);
        assert!(ray.dir.dot(camera.up()).abs() < 1e-6);
    }
}
