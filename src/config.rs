//! Project configuration (iconset.yaml) parsing.
//!
//! The config file records where the asset catalog lives, which master image
//! to use, and generation/validation defaults. Every field is optional and
//! command-line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::error::{IconError, Result};
use crate::generate::{FailurePolicy, GenerateOptions, ResampleFilter};
use crate::manifest::MANIFEST_FILENAME;
use crate::validation::ValidationMode;

/// The name of the project config file.
pub const CONFIG_FILENAME: &str = "iconset.yaml";

/// Project configuration loaded from iconset.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Asset catalog directory: holds the manifest and receives the icons.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Manifest path, relative to `dir` unless absolute.
    pub manifest: Option<PathBuf>,

    /// Master image to resample.
    pub master: Option<PathBuf>,

    /// Per-entry failure handling during generation.
    pub policy: FailurePolicy,

    /// Resampling filter.
    pub filter: ResampleFilter,

    /// Decode files during validation.
    pub strict: bool,

    /// Background used when flattening transparent images.
    pub background: Colour,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            manifest: None,
            master: None,
            policy: FailurePolicy::default(),
            filter: ResampleFilter::default(),
            strict: false,
            background: Colour::DEFAULT_BACKGROUND,
        }
    }
}

impl Config {
    /// Load config from an iconset.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Config {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse_at(&content, path)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_at(content, Path::new(CONFIG_FILENAME))
    }

    fn parse_at(content: &str, path: &Path) -> Result<Self> {
        // An empty file deserializes as YAML null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| IconError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `root/iconset.yaml` if present, defaults otherwise.
    pub fn discover(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Manifest path for a catalog directory.
    pub fn manifest_path(&self, dir: &Path) -> PathBuf {
        match &self.manifest {
            Some(manifest) if manifest.is_absolute() => manifest.clone(),
            Some(manifest) => dir.join(manifest),
            None => dir.join(MANIFEST_FILENAME),
        }
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            policy: self.policy,
            filter: self.filter,
        }
    }

    pub fn validation_mode(&self) -> ValidationMode {
        if self.strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Presence
        }
    }
}
