//! Binary PPM (P6) serialization.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::framebuffer::color_to_rgb;
use crate::{tone_map, Framebuffer};

/// Failure to write the output image.
///
/// Pixel computation never produces errors; only the final bulk write
/// can fail, and it is surfaced rather than swallowed.
#[derive(Debug, thiserror::Error)]
pub enum PpmError {
    #[error("failed to write PPM image: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the framebuffer as a binary P6 pixmap.
///
/// Header is `P6\n<width> <height>\n255\n`, followed by width x height
/// RGB triples, row-major, top row first. Each pixel is tone mapped and
/// each channel quantized as round(255 * clamp(c, 0, 1)).
pub fn write_ppm(framebuffer: &Framebuffer, path: impl AsRef<Path>) -> Result<(), PpmError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    write!(
        writer,
        "P6\n{} {}\n255\n",
        framebuffer.width, framebuffer.height
    )?;
    for &color in &framebuffer.pixels {
        writer.write_all(&color_to_rgb(tone_map(color)))?;
    }
    writer.flush()?;

    log::info!(
        "wrote {}x{} P6 image to {}",
        framebuffer.width,
        framebuffer.height,
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Vec3;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn test_ppm_header_and_body_size() {
        let mut fb = Framebuffer::new(4, 2);
        fb.set(0, 0, Vec3::new(1.0, 0.0, 0.0));
        fb.set(3, 1, Vec3::new(0.0, 0.0, 1.0));

        let path = temp_path("glint_test_small.ppm");
        write_ppm(&fb, &path).expect("write should succeed");

        let bytes = fs::read(&path).expect("read back");
        let header = b"P6\n4 2\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(bytes.len(), header.len() + 4 * 2 * 3);

        // First pixel is pure red, last is pure blue
        assert_eq!(&bytes[header.len()..header.len() + 3], &[255, 0, 0]);
        assert_eq!(&bytes[bytes.len() - 3..], &[0, 0, 255]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_ppm_tone_maps_before_quantization() {
        let mut fb = Framebuffer::new(1, 1);
        fb.set(0, 0, Vec3::new(2.0, 0.5, 0.5));

        let path = temp_path("glint_test_tonemap.ppm");
        write_ppm(&fb, &path).expect("write should succeed");

        let bytes = fs::read(&path).expect("read back");
        let header = b"P6\n1 1\n255\n";
        // (2.0, 0.5, 0.5) rescales to (1.0, 0.25, 0.25)
        assert_eq!(&bytes[header.len()..], &[255, 64, 64]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_end_to_end_render_to_file() {
        use crate::{render, Light, Material, Scene, Sphere, BACKGROUND, HEIGHT, WIDTH};
        use glint_math::Vec4;

        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(
            Vec3::new(-3.0, 0.0, -16.0),
            2.0,
            Material::new(
                1.0,
                Vec4::new(0.6, 0.3, 0.1, 0.0),
                Vec3::new(0.4, 0.4, 0.3),
                50.0,
            ),
        ));
        scene.add_sphere(Sphere::new(
            Vec3::new(1.5, -0.5, -18.0),
            3.0,
            Material::new(
                1.0,
                Vec4::new(0.9, 0.1, 0.0, 0.0),
                Vec3::new(0.3, 0.1, 0.1),
                10.0,
            ),
        ));
        scene.add_light(Light::new(Vec3::new(30.0, 50.0, -25.0), 3.0));

        let framebuffer = render(&scene);
        let path = temp_path("glint_test_full.ppm");
        write_ppm(&framebuffer, &path).expect("write should succeed");

        let bytes = fs::read(&path).expect("read back");
        let header = b"P6\n1024 768\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(bytes.len(), header.len() + (WIDTH * HEIGHT * 3) as usize);

        // A sphere occupies the center of frame, so the center pixel
        // must differ from the sky color.
        let center = header.len() + ((384 * WIDTH + 512) * 3) as usize;
        let background = color_to_rgb(BACKGROUND);
        assert_ne!(&bytes[center..center + 3], &background);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_to_bad_path_is_an_error() {
        let fb = Framebuffer::new(1, 1);
        let result = write_ppm(&fb, "/nonexistent-dir/glint.ppm");
        assert!(matches!(result, Err(PpmError::Io(_))));
    }
}
