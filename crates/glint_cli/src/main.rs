//! Glint entry point: the fixed two-sphere, one-light scene rendered
//! to `out.ppm`.

use anyhow::Result;
use glint_math::{Vec3, Vec4};
use glint_render::{render, write_ppm, Light, Material, Scene, Sphere};
use std::time::Instant;

fn build_scene() -> Scene {
    let ivory = Material::new(
        1.0,
        Vec4::new(0.6, 0.3, 0.1, 0.0),
        Vec3::new(0.4, 0.4, 0.3),
        50.0,
    );
    let red_rubber = Material::new(
        1.0,
        Vec4::new(0.9, 0.1, 0.0, 0.0),
        Vec3::new(0.3, 0.1, 0.1),
        10.0,
    );

    let mut scene = Scene::new();
    scene.add_sphere(Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, ivory));
    scene.add_sphere(Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, red_rubber));
    scene.add_light(Light::new(Vec3::new(30.0, 50.0, -25.0), 3.0));
    scene
}

fn main() -> Result<()> {
    env_logger::init();

    let scene = build_scene();

    let start = Instant::now();
    let framebuffer = render(&scene);
    log::info!("rendered in {:?}", start.elapsed());

    write_ppm(&framebuffer, "./out.ppm")?;
    Ok(())
}
