//! Quick pixel statistics for a single image.

use std::path::Path;

use image::DynamicImage;
use serde::Serialize;

use crate::error::{IconError, Result};

/// Summary statistics for one image, on 8-bit channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageStats {
    pub width: u32,
    pub height: u32,
    /// Decoded colour type, e.g. `Rgba8`.
    pub color: String,
    /// `(min, max)` per channel.
    pub extrema: Vec<(u8, u8)>,
    /// Channel values of the center pixel.
    pub center: Vec<u8>,
    /// The single colour of the image, if every pixel is identical.
    pub solid: Option<Vec<u8>>,
}

impl ImageStats {
    pub fn is_solid(&self) -> bool {
        self.solid.is_some()
    }
}

/// Decode `path` and compute its statistics.
pub fn inspect(path: &Path) -> Result<ImageStats> {
    let image = image::open(path).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(image_stats(&image))
}

pub fn image_stats(image: &DynamicImage) -> ImageStats {
    let color = image.color();
    let channels = usize::from(color.channel_count());
    let raw = match channels {
        1 => image.to_luma8().into_raw(),
        2 => image.to_luma_alpha8().into_raw(),
        3 => image.to_rgb8().into_raw(),
        _ => image.to_rgba8().into_raw(),
    };
    let channels = channels.min(4);

    let mut extrema = vec![(u8::MAX, u8::MIN); channels];
    for pixel in raw.chunks_exact(channels) {
        for (bounds, &value) in extrema.iter_mut().zip(pixel) {
            bounds.0 = bounds.0.min(value);
            bounds.1 = bounds.1.max(value);
        }
    }

    let (width, height) = (image.width(), image.height());
    let center_index = ((height / 2) as usize * width as usize + (width / 2) as usize) * channels;
    let center = raw
        .get(center_index..center_index + channels)
        .map(|p| p.to_vec())
        .unwrap_or_default();

    let mut pixels = raw.chunks_exact(channels);
    let solid = pixels
        .next()
        .filter(|first| pixels.all(|p| p == *first))
        .map(|first| first.to_vec());

    if raw.is_empty() {
        extrema.clear();
    }

    ImageStats {
        width,
        height,
        color: format!("{:?}", color),
        extrema,
        center,
        solid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_solid_image() {
        let img = RgbImage::from_pixel(3, 3, Rgb([14, 165, 232]));
        let stats = image_stats(&DynamicImage::ImageRgb8(img));

        assert_eq!(stats.color, "Rgb8");
        assert_eq!(stats.solid, Some(vec![14, 165, 232]));
        assert_eq!(stats.extrema, vec![(14, 14), (165, 165), (232, 232)]);
        assert_eq!(stats.center, vec![14, 165, 232]);
    }

    #[test]
    fn test_varied_image() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        img.put_pixel(2, 2, Rgba([255, 10, 20, 128]));
        let stats = image_stats(&DynamicImage::ImageRgba8(img));

        assert!(!stats.is_solid());
        assert_eq!(stats.center, vec![255, 10, 20, 128]);
        assert_eq!(
            stats.extrema,
            vec![(0, 255), (0, 10), (0, 20), (128, 255)]
        );
    }

    #[test]
    fn test_grayscale_image() {
        let mut img = GrayImage::from_pixel(2, 2, Luma([7]));
        img.put_pixel(0, 0, Luma([200]));
        let stats = image_stats(&DynamicImage::ImageLuma8(img));

        assert_eq!(stats.extrema, vec![(7, 200)]);
        assert_eq!(stats.center, vec![7]);
    }

    #[test]
    fn test_inspect_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("solid.png");
        RgbImage::from_pixel(5, 5, Rgb([1, 2, 3])).save(&path).unwrap();

        let stats = inspect(&path).unwrap();
        assert_eq!((stats.width, stats.height), (5, 5));
        assert!(stats.is_solid());
    }

    #[test]
    fn test_inspect_missing_file() {
        let dir = tempdir().unwrap();
        assert!(inspect(&dir.path().join("missing.png")).is_err());
    }
}
