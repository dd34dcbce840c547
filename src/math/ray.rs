use glam::Vec3;

/// A world-space ray with a normalized direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Slab test against an axis-aligned box.
    ///
    /// Returns the entry distance, or the exit distance when the origin is
    /// inside the box. `None` means a miss; rays starting on the far face and
    /// pointing away miss rather than self-intersect.
    pub fn aabb_distance(&self, box_min: Vec3, box_max: Vec3) -> Option<f32> {
        const EPSILON: f32 = 1e-8;

        // Near-zero components are clamped so the division stays finite
        let inv = |d: f32| {
            if d.abs() < EPSILON {
                1.0 / EPSILON.copysign(d)
            } else {
                1.0 / d
            }
        };
        let inv_dir = Vec3::new(inv(self.dir.x), inv(self.dir.y), inv(self.dir.z));

        let t_min = (box_min - self.origin) * inv_dir;
        let t_max = (box_max - self.origin) * inv_dir;

        let t1 = t_min.min(t_max);
        let t2 = t_min.max(t_max);

        let t_near = t1.x.max(t1.y).max(t1.z);
        let t_far = t2.x.min(t2.y).min(t2.z);

        if t_near > t_far || t_far < 0.0 {
            return None;
        }

        if t_near < 0.0 {
            (t_far > 1e-3).then_some(t_far)
        } else {
            Some(t_near)
        }
    }

    /// Analytic sphere intersection, nearest positive root
    pub fn sphere_distance(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let a = self.dir.dot(self.dir);
        let half_b = oc.dot(self.dir);
        let c = oc.dot(oc) - radius * radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let near = (-half_b - sqrt_d) / a;
        if near > 1e-4 {
            return Some(near);
        }
        let far = (-half_b + sqrt_d) / a;
        (far > 1e-4).then_some(far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_hit_from_outside() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray
            .aabb_distance(Vec3::new(5.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0))
            .unwrap();
        assert!((t - 5.0).abs() < 0.01);
    }

    #[test]
    fn aabb_miss() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(
            ray.aabb_distance(Vec3::new(5.0, 2.0, 2.0), Vec3::new(10.0, 3.0, 3.0)),
            None
        );
    }

    #[test]
    fn aabb_origin_inside_returns_exit() {
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::X);
        let t = ray
            .aabb_distance(Vec3::new(0.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0))
            .unwrap();
        assert!(t > 0.0);
    }

    #[test]
    fn sphere_hit_straight_on() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let t = ray.sphere_distance(Vec3::new(0.0, 0.0, 10.0), 2.0).unwrap();
        assert!((t - 8.0).abs() < 1e-4);
    }

    #[test]
    fn sphere_miss() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(ray.sphere_distance(Vec3::new(5.0, 0.0, 10.0), 2.0), None);
    }

    #[test]
    fn sphere_origin_inside_returns_far_root() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        let t = ray.sphere_distance(Vec3::new(0.0, 0.0, 10.0), 2.0).unwrap();
        assert!((t - 2.0).abs() < 1e-4);
    }
}
