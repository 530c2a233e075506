//! Recursive shading: Snell's-law refraction plus diffuse/specular
//! lighting, blended by the material's albedo weights.

use crate::{scene_intersect, Scene, SceneHit};
use glint_math::{Ray, Vec3};

/// Flat sky color returned when a ray misses the scene.
pub const BACKGROUND: Vec3 = Vec3::new(0.2, 0.7, 0.8);

/// Recursion cutoff for the refraction chain.
///
/// The upstream design threads a depth counter without checking it;
/// the cap guarantees termination and returns the background once
/// exceeded. Shallow scenes never reach it.
pub const MAX_DEPTH: usize = 8;

/// Offset applied along the normal when spawning the refraction ray,
/// to avoid immediate self-intersection.
const SELF_HIT_EPS: f32 = 1e-3;

/// Refracted direction by Snell's law.
///
/// If the ray arrives from inside the medium (cosine of incidence
/// negative) the normal is flipped and the indices swapped. A negative
/// discriminant means total internal reflection; the upstream design
/// returns a fixed placeholder direction with no physical meaning
/// there, and that behavior is kept as-is.
fn refract(incident: Vec3, normal: Vec3, eta_t: f32, eta_i: f32) -> Vec3 {
    let cosi = -incident.dot(normal).clamp(-1.0, 1.0);
    if cosi < 0.0 {
        // Ray comes from inside the object: swap the air and the media
        return refract(incident, -normal, eta_i, eta_t);
    }
    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        Vec3::new(1.0, 0.0, 0.0)
    } else {
        incident * eta + normal * (eta * cosi - k.sqrt())
    }
}

/// Compute the color seen along `ray`.
///
/// Finds the nearest intersection, recurses along the refracted ray,
/// accumulates diffuse and specular intensity from every light, and
/// blends the three terms by the material's weights. The specular term
/// uses a literal zero base and so contributes nothing; this matches
/// the upstream shading formula and is deliberately not corrected.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: usize) -> Vec3 {
    if depth > MAX_DEPTH {
        return BACKGROUND;
    }

    let rec = match scene_intersect(ray, scene) {
        SceneHit::Miss => return BACKGROUND,
        SceneHit::Sphere(rec) | SceneHit::Plane(rec) => rec,
    };

    let refract_dir = refract(ray.direction, rec.normal, rec.material.refractive_index, 1.0)
        .normalize();
    let refract_orig = if refract_dir.dot(rec.normal) < 0.0 {
        rec.point - rec.normal * SELF_HIT_EPS
    } else {
        rec.point + rec.normal * SELF_HIT_EPS
    };
    let refract_color = cast_ray(&Ray::new(refract_orig, refract_dir), scene, depth + 1);

    let mut diffuse_intensity = 0.0;
    let mut specular_intensity = 0.0;
    for light in &scene.lights {
        let light_dir = (light.position - rec.point).normalize();
        diffuse_intensity += light.intensity * light_dir.dot(rec.normal).max(0.0);
        // Structurally zero: the base is a literal 0, not a reflection
        // alignment term.
        specular_intensity += 0.0_f32.powf(rec.material.specular_exponent) * light.intensity;
    }

    rec.material.diffuse_color * diffuse_intensity * rec.material.albedo[0]
        + Vec3::ONE * specular_intensity * rec.material.albedo[1]
        + refract_color * rec.material.albedo[3]
}
