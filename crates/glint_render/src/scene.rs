//! Scene description: spheres, lights, and the container that owns them.

use crate::Material;
use glint_math::{Ray, Vec3};

/// A sphere primitive with its material.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere. Radius must be positive.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Analytic ray/sphere intersection.
    ///
    /// Projects the center-to-origin vector onto the ray direction and
    /// solves the quadratic in closed form. Returns the distance along
    /// the ray to the nearest intersection in front of the origin, or
    /// `None` if the ray misses (or the sphere is entirely behind it).
    /// Of the two roots the smaller non-negative one is preferred; if it
    /// is negative the larger root is used instead.
    pub fn ray_intersect(&self, ray: &Ray) -> Option<f32> {
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        let d2 = l.dot(l) - tca * tca;
        if d2 > self.radius * self.radius {
            return None;
        }
        let thc = (self.radius * self.radius - d2).sqrt();
        let mut t0 = tca - thc;
        let t1 = tca + thc;
        if t0 < 0.0 {
            t0 = t1;
        }
        if t0 < 0.0 {
            return None;
        }
        Some(t0)
    }
}

/// A point light.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// The scene: spheres and lights, owned for the duration of a render.
#[derive(Debug, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere to the scene.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_material() -> Material {
        Material::default()
    }

    #[test]
    fn test_head_on_hit_distance() {
        // Aimed at the center from outside: distance is |origin - center| - radius
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0, test_material());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let t = sphere.ray_intersect(&ray).expect("should hit");
        assert!((t - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_perpendicular_miss() {
        // Perpendicular distance from center (3.0) exceeds radius (2.0)
        let sphere = Sphere::new(Vec3::new(3.0, 0.0, -10.0), 2.0, test_material());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(sphere.ray_intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 10.0), 2.0, test_material());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(sphere.ray_intersect(&ray).is_none());
    }

    #[test]
    fn test_origin_inside_sphere_uses_far_root() {
        // Near root is negative, so the exit point (z = -4) is reported
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 3.0, test_material());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let t = sphere.ray_intersect(&ray).expect("should hit from inside");
        assert!((t - 4.0).abs() < 1e-4);
    }
}
