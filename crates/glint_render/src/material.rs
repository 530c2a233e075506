//! Surface material description.

use glint_math::{Vec3, Vec4};

/// Shading parameters for a surface.
///
/// `albedo` holds four weights: diffuse, specular, reflection, and
/// refraction. The reflection weight is carried in the data but never
/// consulted by the shading formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Index of refraction (1.0 = air, 1.5 = glass)
    pub refractive_index: f32,
    /// Shading weights: [diffuse, specular, reflection, refraction]
    pub albedo: Vec4,
    /// Diffuse surface color, components in [0, 1]
    pub diffuse_color: Vec3,
    /// Phong specular exponent
    pub specular_exponent: f32,
}

impl Material {
    /// Create a new material.
    pub fn new(
        refractive_index: f32,
        albedo: Vec4,
        diffuse_color: Vec3,
        specular_exponent: f32,
    ) -> Self {
        Self {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }
}

impl Default for Material {
    /// A plain diffuse-only material: index 1, full diffuse weight,
    /// black color. The checkerboard plane starts from this and fills
    /// in its own diffuse color.
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
            albedo: Vec4::new(1.0, 0.0, 0.0, 0.0),
            diffuse_color: Vec3::ZERO,
            specular_exponent: 0.0,
        }
    }
}
