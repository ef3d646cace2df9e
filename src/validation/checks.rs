//! Per-entry checks run by the validator.
//!
//! Each check inspects the file for one manifest entry and returns the
//! reason it fails, or `None` when it passes.

use std::fs;
use std::path::Path;

use crate::manifest::ManifestEntry;

use super::result::FailureReason;

/// Check that a file exists and is not empty.
pub fn check_presence(path: &Path) -> Option<FailureReason> {
    match fs::metadata(path) {
        Ok(meta) if !meta.is_file() => Some(FailureReason::Missing),
        Ok(meta) if meta.len() == 0 => Some(FailureReason::Empty),
        Ok(_) => None,
        Err(_) => Some(FailureReason::Missing),
    }
}

/// Decode a file and check its dimensions and channel layout.
pub fn check_decoded(path: &Path, entry: &ManifestEntry) -> Option<FailureReason> {
    let expected = match entry.pixel_size() {
        Ok(pixels) => pixels,
        Err(e) => {
            return Some(FailureReason::InvalidSize {
                message: e.to_string(),
            })
        }
    };

    let image = match image::open(path) {
        Ok(image) => image,
        Err(e) => {
            return Some(FailureReason::Undecodable {
                message: e.to_string(),
            })
        }
    };

    if image.width() != expected || image.height() != expected {
        return Some(FailureReason::WrongSize {
            expected,
            width: image.width(),
            height: image.height(),
        });
    }

    if image.color().has_alpha() {
        return Some(FailureReason::HasAlpha);
    }

    None
}
