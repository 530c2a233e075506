//! Ray/scene intersection: nearest hit across spheres and the
//! checkerboard ground plane.

use crate::{Material, Scene};
use glint_math::{Ray, Vec3};

/// Hits beyond this distance are treated as missing the scene.
pub const MAX_RENDER_DIST: f32 = 1000.0;

/// The checkerboard plane has equation y = -4.
const PLANE_Y: f32 = -4.0;

/// Rays this close to parallel with the plane never hit it.
const PLANE_EPS: f32 = 1e-3;

/// Record of a ray/surface intersection.
///
/// The material is carried by value: the checkerboard synthesizes its
/// material on the fly rather than referencing a stored object.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal, oriented outward from the surface
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: Material,
    /// Distance along the ray to the intersection
    pub t: f32,
}

/// Result of intersecting a ray with the scene.
///
/// The intersector performs the nearest-distance comparison itself and
/// produces exactly one winner, so the two test paths never share
/// mutable state.
#[derive(Debug, Clone, Copy)]
pub enum SceneHit {
    /// Nothing within [`MAX_RENDER_DIST`]
    Miss,
    /// Nearest surface is a sphere
    Sphere(HitRecord),
    /// Nearest surface is the checkerboard plane
    Plane(HitRecord),
}

impl SceneHit {
    /// The hit record, if any surface was hit.
    pub fn record(&self) -> Option<&HitRecord> {
        match self {
            SceneHit::Miss => None,
            SceneHit::Sphere(rec) | SceneHit::Plane(rec) => Some(rec),
        }
    }
}

/// Find the nearest intersection of `ray` with the scene.
///
/// Spheres are scanned linearly keeping the smallest positive distance;
/// the plane wins only if its distance is strictly smaller than the
/// best sphere distance and the hit lies inside the plane's bounded
/// window (|x| < 10, -30 < z < -10).
pub fn scene_intersect(ray: &Ray, scene: &Scene) -> SceneHit {
    let mut spheres_dist = f32::MAX;
    let mut sphere_hit: Option<HitRecord> = None;
    for sphere in &scene.spheres {
        if let Some(t) = sphere.ray_intersect(ray) {
            if t < spheres_dist {
                spheres_dist = t;
                let point = ray.at(t);
                sphere_hit = Some(HitRecord {
                    point,
                    normal: (point - sphere.center).normalize(),
                    material: sphere.material,
                    t,
                });
            }
        }
    }

    if ray.direction.y.abs() > PLANE_EPS {
        let d = -(ray.origin.y - PLANE_Y) / ray.direction.y;
        let pt = ray.at(d);
        if d > 0.0 && pt.x.abs() < 10.0 && pt.z < -10.0 && pt.z > -30.0 && d < spheres_dist {
            if d < MAX_RENDER_DIST {
                return SceneHit::Plane(HitRecord {
                    point: pt,
                    normal: Vec3::Y,
                    material: checkerboard_material(pt),
                    t: d,
                });
            }
            return SceneHit::Miss;
        }
    }

    match sphere_hit {
        Some(rec) if rec.t < MAX_RENDER_DIST => SceneHit::Sphere(rec),
        _ => SceneHit::Miss,
    }
}

/// Checkerboard material at a plane hit point.
///
/// The diffuse color alternates on the parity of the truncated
/// half-coordinates; the large positive bias keeps the x term positive
/// so truncation behaves like floor across the visible window. All
/// other fields come from the default material.
fn checkerboard_material(point: Vec3) -> Material {
    let parity = ((0.5 * point.x + 1000.0) as i32 + (0.5 * point.z) as i32) & 1;
    let diffuse_color = if parity == 1 {
        Vec3::new(0.3, 0.3, 0.3)
    } else {
        Vec3::new(0.3, 0.2, 0.1)
    };
    Material {
        diffuse_color,
        ..Material::default()
    }
}
