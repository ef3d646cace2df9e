//! Flatten transparent artwork onto an opaque background.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, Rgb, RgbImage, RgbaImage};

use crate::colour::Colour;
use crate::error::{IconError, Result};

/// JPEG quality used for flattened output.
pub const JPEG_QUALITY: u8 = 95;

/// Composite `input` onto `background` and write the opaque result.
///
/// The output format follows the output extension; JPEG output is encoded at
/// [`JPEG_QUALITY`].
pub fn flatten_alpha(input: &Path, output: &Path, background: Colour) -> Result<()> {
    let image = image::open(input)
        .map_err(|e| IconError::Io {
            path: input.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgba8();

    let flat = flatten_pixels(&image, background);
    write_flattened(&flat, output)
}

/// Alpha-blend every pixel over `background`.
pub fn flatten_pixels(image: &RgbaImage, background: Colour) -> RgbImage {
    let bg = background.to_rgb();

    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        Rgb([blend(r, bg[0], a), blend(g, bg[1], a), blend(b, bg[2], a)])
    })
}

fn blend(fg: u8, bg: u8, alpha: u8) -> u8 {
    let alpha = u16::from(alpha);
    let value = u16::from(fg) * alpha + u16::from(bg) * (255 - alpha);
    ((value + 127) / 255) as u8
}

fn write_flattened(image: &RgbImage, output: &Path) -> Result<()> {
    let write_error = |message: String| IconError::Write {
        path: output.to_path_buf(),
        message,
    };

    match ImageFormat::from_path(output) {
        Ok(ImageFormat::Jpeg) => {
            let file = File::create(output).map_err(|e| write_error(e.to_string()))?;
            let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), JPEG_QUALITY);
            encoder
                .encode_image(image)
                .map_err(|e| write_error(e.to_string()))
        }
        _ => image.save(output).map_err(|e| write_error(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend(200, 10, 255), 200);
        assert_eq!(blend(200, 10, 0), 10);
        assert_eq!(blend(255, 0, 128), 128);
    }

    #[test]
    fn test_flatten_pixels() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([255, 0, 0, 0]));

        let flat = flatten_pixels(&img, Colour::DEFAULT_BACKGROUND);

        assert_eq!(flat.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(flat.get_pixel(1, 0).0, [14, 165, 232]);
    }

    #[test]
    fn test_flatten_to_png() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0])).save(&input).unwrap();

        flatten_alpha(&input, &output, Colour::WHITE).unwrap();

        let decoded = image::open(&output).unwrap();
        assert!(!decoded.color().has_alpha());
        assert_eq!(decoded.to_rgb8().get_pixel(2, 2).0, [255, 255, 255]);
    }

    #[test]
    fn test_flatten_to_jpeg() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.jpg");
        RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0])).save(&input).unwrap();

        flatten_alpha(&input, &output, Colour::BLACK).unwrap();

        let decoded = image::open(&output).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 8));
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn test_flatten_missing_input() {
        let dir = tempdir().unwrap();
        let err = flatten_alpha(
            &dir.path().join("none.png"),
            &dir.path().join("out.png"),
            Colour::BLACK,
        )
        .unwrap_err();
        assert!(matches!(err, IconError::Io { .. }));
    }
}
