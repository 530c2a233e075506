//! Glint renderer - recursive refraction ray casting.
//!
//! A minimal offline renderer: one camera ray per pixel, analytic
//! sphere and checkerboard-plane intersection, and a recursive caster
//! that follows Snell's-law refraction through transparent media.

mod camera;
mod framebuffer;
mod intersect;
mod material;
mod ppm;
mod renderer;
mod scene;
mod shade;

pub use camera::Camera;
pub use framebuffer::{color_to_rgb, Framebuffer};
pub use intersect::{scene_intersect, HitRecord, SceneHit, MAX_RENDER_DIST};
pub use material::Material;
pub use ppm::{write_ppm, PpmError};
pub use renderer::{render, tone_map, HEIGHT, WIDTH};
pub use scene::{Light, Scene, Sphere};
pub use shade::{cast_ray, BACKGROUND, MAX_DEPTH};

/// Re-export math types from glint_math
pub use glint_math::{Ray, Vec3, Vec4};
