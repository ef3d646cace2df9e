//! The master image every icon is resampled from.

use std::path::{Path, PathBuf};

use image::{imageops, DynamicImage, RgbImage};

use crate::error::{IconError, Result};

use super::ResampleFilter;

/// A decoded master image, converted to 8-bit RGB on load.
#[derive(Debug, Clone)]
pub struct MasterImage {
    path: PathBuf,
    pixels: RgbImage,
}

impl MasterImage {
    /// Open and decode a master image. Any alpha channel is dropped.
    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path).map_err(|e| IconError::MasterImage {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Self::from_image(path, image))
    }

    pub fn from_image(path: impl Into<PathBuf>, image: DynamicImage) -> Self {
        Self {
            path: path.into(),
            pixels: image.to_rgb8(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// Resample to a `size` x `size` square.
    ///
    /// Returns a fresh bitmap; the master is never modified. Non-square
    /// masters are stretched.
    pub fn resize(&self, size: u32, filter: ResampleFilter) -> RgbImage {
        if self.width() == size && self.height() == size {
            return self.pixels.clone();
        }

        imageops::resize(&self.pixels, size, size, filter.filter_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn checker(size: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(size, size, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 128])
            } else {
                Rgba([0, 0, 0, 255])
            }
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_from_image_drops_alpha() {
        let master = MasterImage::from_image("mem.png", checker(4));
        assert_eq!(master.pixels().get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(master.width(), 4);
        assert!(master.is_square());
    }

    #[test]
    fn test_resize_down_and_up() {
        let master = MasterImage::from_image("mem.png", checker(16));

        let small = master.resize(5, ResampleFilter::Lanczos3);
        assert_eq!(small.dimensions(), (5, 5));

        let large = master.resize(40, ResampleFilter::CatmullRom);
        assert_eq!(large.dimensions(), (40, 40));

        // Master untouched
        assert_eq!(master.width(), 16);
    }

    #[test]
    fn test_resize_stretches_non_square() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(20, 10));
        let master = MasterImage::from_image("wide.png", img);

        assert!(!master.is_square());
        assert_eq!(master.resize(8, ResampleFilter::Triangle).dimensions(), (8, 8));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempdir().unwrap();
        let err = MasterImage::open(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, IconError::MasterImage { .. }));
    }

    #[test]
    fn test_open_undecodable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"not a png").unwrap();

        let err = MasterImage::open(&path).unwrap_err();
        assert!(matches!(err, IconError::MasterImage { .. }));
    }

    #[test]
    fn test_open_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("master.png");
        checker(8).save(&path).unwrap();

        let master = MasterImage::open(&path).unwrap();
        assert_eq!((master.width(), master.height()), (8, 8));
        assert_eq!(master.path(), path.as_path());
    }
}
