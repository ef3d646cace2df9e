//! Strip alpha channels from existing PNG icons.

use std::path::{Path, PathBuf};

use image::{ColorType, ImageFormat};
use walkdir::WalkDir;

use crate::error::{IconError, Result};

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripOutcome {
    /// Rewritten as 8-bit RGB.
    Converted,
    /// Already 8-bit RGB; left untouched.
    Unchanged,
}

/// Results of stripping a whole directory.
#[derive(Debug, Default)]
pub struct StripReport {
    pub converted: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, IconError)>,
}

impl StripReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.unchanged.len() + self.failures.len()
    }
}

/// Rewrite a PNG in place as 8-bit RGB unless it already is.
pub fn strip_alpha(path: &Path) -> Result<StripOutcome> {
    let image = image::open(path).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if image.color() == ColorType::Rgb8 {
        return Ok(StripOutcome::Unchanged);
    }

    image
        .to_rgb8()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(StripOutcome::Converted)
}

/// Strip every `.png` directly inside `dir`.
///
/// Failures are collected per file; the remaining files are still processed.
pub fn strip_alpha_dir(dir: &Path) -> Result<StripReport> {
    if !dir.is_dir() {
        return Err(IconError::Io {
            path: dir.to_path_buf(),
            message: "Directory not found".to_string(),
        });
    }

    let mut report = StripReport::default();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() || !is_png(path) {
            continue;
        }

        match strip_alpha(path) {
            Ok(StripOutcome::Converted) => report.converted.push(path.to_path_buf()),
            Ok(StripOutcome::Unchanged) => report.unchanged.push(path.to_path_buf()),
            Err(e) => report.failures.push((path.to_path_buf(), e)),
        }
    }

    Ok(report)
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}
