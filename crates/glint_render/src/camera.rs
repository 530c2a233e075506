//! Camera for ray generation.

use glint_math::{Ray, Vec3};

/// Pinhole camera fixed at the origin, looking down the negative z
/// axis. Generates one primary ray per pixel.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    /// Vertical field of view in radians
    pub vfov: f32,
}

impl Camera {
    /// Create a camera for the given resolution and vertical fov.
    pub fn new(image_width: u32, image_height: u32, vfov: f32) -> Self {
        Self {
            image_width,
            image_height,
            vfov,
        }
    }

    /// Primary ray through the center of pixel (i, j).
    ///
    /// Row 0 is the top of the image; the y term flips the vertical
    /// axis so the framebuffer comes out top row first.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let width = self.image_width as f32;
        let height = self.image_height as f32;
        let x = (i as f32 + 0.5) - width / 2.0;
        let y = -(j as f32 + 0.5) + height / 2.0;
        let z = -height / (2.0 * (self.vfov / 2.0).tan());
        Ray::new(Vec3::ZERO, Vec3::new(x, y, z).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_center_pixel_looks_down_negative_z() {
        let camera = Camera::new(1024, 768, PI / 3.0);
        let ray = camera.get_ray(512, 384);

        assert_eq!(ray.origin, Vec3::ZERO);
        // Pixel centers are offset half a pixel from the exact axis
        assert!(ray.direction.z < -0.999);
        assert!(ray.direction.x.abs() < 0.001);
        assert!(ray.direction.y.abs() < 0.001);
    }

    #[test]
    fn test_ray_directions_are_unit_length() {
        let camera = Camera::new(1024, 768, PI / 3.0);
        for &(i, j) in &[(0, 0), (1023, 767), (512, 0), (0, 384)] {
            let ray = camera.get_ray(i, j);
            assert!((ray.direction.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_row_zero_is_image_top() {
        let camera = Camera::new(1024, 768, PI / 3.0);
        let top = camera.get_ray(512, 0);
        let bottom = camera.get_ray(512, 767);
        assert!(top.direction.y > 0.0);
        assert!(bottom.direction.y < 0.0);
    }
}
