//! Asset catalog manifest (`Contents.json`) loading.
//!
//! The manifest lists every icon file a catalog requires, together with its
//! logical size and scale factor. It is the single contract shared by the
//! generator (which writes the files) and the validator (which checks them).

mod size;

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};

pub use size::{parse_logical_size, parse_scale, resolve, MAX_PIXELS};

/// The name of the manifest file inside an asset catalog directory.
pub const MANIFEST_FILENAME: &str = "Contents.json";

/// A single required output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// File name relative to the output directory.
    pub filename: String,
    /// Logical size, e.g. `"20x20"`.
    pub size: String,
    /// Scale factor, e.g. `"2x"`.
    pub scale: String,
    /// Target idiom (`iphone`, `ipad`, `ios-marketing`, ...), if given.
    pub idiom: Option<String>,
}

impl ManifestEntry {
    pub fn new(
        filename: impl Into<String>,
        size: impl Into<String>,
        scale: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            size: size.into(),
            scale: scale.into(),
            idiom: None,
        }
    }

    /// Pixel edge length of this entry's square output image.
    pub fn pixel_size(&self) -> Result<u32> {
        resolve(&self.size, &self.scale)
    }

    /// Path of this entry's file inside `dir`.
    ///
    /// Generation and validation both go through this join.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.filename)
    }
}

/// An ordered, read-only list of required output files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Entries with an assigned filename, in manifest order.
    pub entries: Vec<ManifestEntry>,
    /// Number of slots in the manifest with no filename assigned.
    pub unassigned: usize,
}

#[derive(Deserialize)]
struct RawManifest {
    #[serde(default)]
    images: Vec<RawEntry>,
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    filename: Option<String>,
    size: String,
    // Single-size catalogs omit the scale for the 1x marketing icon
    #[serde(default = "default_scale")]
    scale: String,
    #[serde(default)]
    idiom: Option<String>,
}

fn default_scale() -> String {
    "1x".to_string()
}

impl Manifest {
    /// Load a manifest from a `Contents.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::ManifestLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::parse_at(&content, path)
    }

    /// Parse a manifest from a JSON string.
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_at(content, Path::new(MANIFEST_FILENAME))
    }

    /// Build a manifest from entries, enforcing the same invariants as `load`.
    pub fn from_entries(entries: Vec<ManifestEntry>) -> Result<Self> {
        let path = Path::new(MANIFEST_FILENAME);
        check_entries(&entries, path)?;
        Ok(Self {
            entries,
            unassigned: 0,
        })
    }

    fn parse_at(content: &str, path: &Path) -> Result<Self> {
        let raw: RawManifest =
            serde_json::from_str(content).map_err(|e| IconError::ManifestLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut entries = Vec::with_capacity(raw.images.len());
        let mut unassigned = 0;

        for image in raw.images {
            match image.filename {
                Some(filename) => entries.push(ManifestEntry {
                    filename,
                    size: image.size,
                    scale: image.scale,
                    idiom: image.idiom,
                }),
                None => unassigned += 1,
            }
        }

        check_entries(&entries, path)?;

        Ok(Self {
            entries,
            unassigned,
        })
    }

    /// Number of entries with an assigned filename.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter()
    }
}

/// Reject filenames that escape the output directory or collide.
///
/// Collisions compare case-insensitively, since catalogs usually live on
/// case-insensitive filesystems.
fn check_entries(entries: &[ManifestEntry], path: &Path) -> Result<()> {
    let mut seen = HashSet::new();

    for entry in entries {
        let candidate = Path::new(&entry.filename);
        let is_relative = !entry.filename.is_empty()
            && candidate
                .components()
                .all(|c| matches!(c, Component::Normal(_)));

        if !is_relative {
            return Err(IconError::ManifestLoad {
                path: path.to_path_buf(),
                message: format!(
                    "filename '{}' must be a relative path inside the catalog",
                    entry.filename
                ),
            });
        }

        if !seen.insert(entry.filename.to_ascii_lowercase()) {
            return Err(IconError::DuplicateFilename {
                path: path.to_path_buf(),
                filename: entry.filename.clone(),
            });
        }
    }

    Ok(())
}
