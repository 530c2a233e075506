//! Simple framebuffer for storing render output.

use glint_math::Vec3;

/// Row-major pixel buffer, top row first.
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec3>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Vec3) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Convert a tone-mapped color to 8-bit RGB.
pub fn color_to_rgb(color: Vec3) -> [u8; 3] {
    let quantize = |c: f32| (255.0 * c.clamp(0.0, 1.0)).round() as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}
