//! Size resolution for manifest entries.
//!
//! Turns a logical icon size (`"20x20"`, `"83.5x83.5"`) and a scale factor
//! (`"2x"`) into the pixel edge length of the square output image.

use crate::error::{IconError, Result};

/// Largest edge length an entry may resolve to.
///
/// Well above any real app icon (1024) while keeping a single output
/// buffer to about 800 MB of RGB.
pub const MAX_PIXELS: u32 = 16384;

/// Resolve a logical size and scale into a pixel edge length.
///
/// ```
/// use iconset::manifest::resolve;
///
/// assert_eq!(resolve("20x20", "2x").unwrap(), 40);
/// assert_eq!(resolve("83.5x83.5", "2x").unwrap(), 167);
/// ```
pub fn resolve(size: &str, scale: &str) -> Result<u32> {
    let base = parse_logical_size(size)?;
    let multiplier = parse_scale(scale)?;

    let pixels = (base * f64::from(multiplier)).round();
    if pixels < 1.0 {
        return Err(IconError::SizeParse {
            field: "size",
            value: format!("{} @ {}", size, scale),
            message: format!("resolves to {} pixels", pixels),
        });
    }
    if pixels > f64::from(MAX_PIXELS) {
        return Err(IconError::SizeParse {
            field: "size",
            value: format!("{} @ {}", size, scale),
            message: format!(
                "resolves to {} pixels, above the limit of {}",
                pixels, MAX_PIXELS
            ),
        });
    }

    Ok(pixels as u32)
}

/// Parse a `WxH` logical size, returning the edge length.
///
/// Only square sizes are accepted since every output is square.
pub fn parse_logical_size(size: &str) -> Result<f64> {
    let (width, height) = size
        .trim()
        .split_once('x')
        .ok_or_else(|| size_error(size, "expected WxH (e.g. 20x20)"))?;

    let width = parse_edge(width).ok_or_else(|| {
        size_error(size, &format!("width '{}' is not a positive number", width))
    })?;
    let height = parse_edge(height).ok_or_else(|| {
        size_error(size, &format!("height '{}' is not a positive number", height))
    })?;

    if width != height {
        return Err(size_error(size, "only square icon sizes are supported"));
    }

    Ok(width)
}

/// Parse an `Nx` scale factor into its integer multiplier.
pub fn parse_scale(scale: &str) -> Result<u32> {
    let digits = scale
        .trim()
        .strip_suffix('x')
        .ok_or_else(|| scale_error(scale, "expected an integer followed by 'x' (e.g. 2x)"))?;

    let multiplier: u32 = digits
        .parse()
        .map_err(|_| scale_error(scale, &format!("'{}' is not an integer", digits)))?;

    if multiplier == 0 {
        return Err(scale_error(scale, "scale must be at least 1x"));
    }

    Ok(multiplier)
}

fn parse_edge(token: &str) -> Option<f64> {
    let value: f64 = token.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

fn size_error(value: &str, message: &str) -> IconError {
    IconError::SizeParse {
        field: "size",
        value: value.to_string(),
        message: message.to_string(),
    }
}

fn scale_error(value: &str, message: &str) -> IconError {
    IconError::SizeParse {
        field: "scale",
        value: value.to_string(),
        message: message.to_string(),
    }
}
