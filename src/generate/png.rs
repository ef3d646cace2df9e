//! PNG output for generated icons.
//!
//! Icons are written as 8-bit RGB PNGs with no alpha channel.

use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::error::{IconError, Result};

/// Write an RGB bitmap to a PNG file, replacing any existing file.
pub fn write_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::Write {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}
