//! Pixel loop and tone mapping.

use std::f32::consts::PI;

use crate::{cast_ray, Camera, Framebuffer, Scene};
use glint_math::Vec3;

/// Fixed output resolution.
pub const WIDTH: u32 = 1024;
pub const HEIGHT: u32 = 768;

/// Vertical field of view.
const FOV: f32 = PI / 3.0;

/// Scale an out-of-range color down by its maximum channel.
///
/// Preserves the channel ratios (hue) instead of clipping each channel
/// independently. Colors already inside [0, 1] pass through unchanged.
pub fn tone_map(color: Vec3) -> Vec3 {
    let max = color.x.max(color.y).max(color.z);
    if max > 1.0 {
        color * (1.0 / max)
    } else {
        color
    }
}

/// Render the scene into a framebuffer.
///
/// One ray per pixel, sequential over the whole image; each pixel is
/// independent of the others.
pub fn render(scene: &Scene) -> Framebuffer {
    let camera = Camera::new(WIDTH, HEIGHT, FOV);
    let mut framebuffer = Framebuffer::new(WIDTH, HEIGHT);

    for j in 0..HEIGHT {
        for i in 0..WIDTH {
            let ray = camera.get_ray(i, j);
            framebuffer.set(i, j, cast_ray(&ray, scene, 0));
        }
    }

    log::debug!("rendered {}x{} pixels", WIDTH, HEIGHT);
    framebuffer
}
