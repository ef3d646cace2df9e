//! Icon generation.
//!
//! Resamples a master image once per manifest entry and writes each result
//! as an alpha-free PNG into the output directory.
//!
//! # Example
//!
//! ```ignore
//! use iconset::generate::{GenerateOptions, Generator, MasterImage};
//! use iconset::manifest::Manifest;
//!
//! let manifest = Manifest::load(&dir.join("Contents.json"))?;
//! let master = MasterImage::open(Path::new("icon.png"))?;
//! let report = Generator::new(GenerateOptions::default()).generate(&master, &manifest, &dir)?;
//! println!("wrote {} icons", report.written.len());
//! ```

mod master;
mod png;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::manifest::{Manifest, ManifestEntry};

pub use master::MasterImage;
pub use png::write_png;

/// What to do when a single entry cannot be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Record the failure and keep going.
    #[default]
    Continue,
    /// Stop at the first failure.
    Abort,
}

/// Resampling filter. Nearest-neighbour is deliberately not offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Gaussian,
    Triangle,
}

impl ResampleFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Triangle => FilterType::Triangle,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub policy: FailurePolicy,
    pub filter: ResampleFilter,
}

/// A file written by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub filename: String,
    pub path: PathBuf,
    pub pixels: u32,
}

/// An entry the generator could not produce.
#[derive(Debug)]
pub struct EntryFailure {
    pub filename: String,
    pub error: IconError,
}

/// Per-entry progress reported while generating.
#[derive(Debug)]
pub enum Outcome<'a> {
    Written(&'a Generated),
    Failed(&'a EntryFailure),
}

/// Summary of a generation run, in manifest order.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub written: Vec<Generated>,
    pub failures: Vec<EntryFailure>,
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of entries attempted.
    pub fn total(&self) -> usize {
        self.written.len() + self.failures.len()
    }
}

/// Writes one icon per manifest entry.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: GenerateOptions,
}

impl Generator {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> GenerateOptions {
        self.options
    }

    /// Generate every entry of `manifest` into `output_dir`.
    pub fn generate(
        &self,
        master: &MasterImage,
        manifest: &Manifest,
        output_dir: &Path,
    ) -> Result<GenerateReport> {
        self.generate_with(master, manifest, output_dir, |_| {})
    }

    /// Like [`Generator::generate`], calling `observe` after each entry.
    ///
    /// Under [`FailurePolicy::Abort`] the first failure is returned as the
    /// error and is not passed to `observe`.
    pub fn generate_with(
        &self,
        master: &MasterImage,
        manifest: &Manifest,
        output_dir: &Path,
        mut observe: impl FnMut(Outcome<'_>),
    ) -> Result<GenerateReport> {
        if !output_dir.is_dir() {
            return Err(IconError::OutputDir {
                path: output_dir.to_path_buf(),
            });
        }

        let mut report = GenerateReport::default();

        for entry in manifest.iter() {
            match self.generate_entry(master, entry, output_dir) {
                Ok(generated) => {
                    report.written.push(generated);
                    if let Some(last) = report.written.last() {
                        observe(Outcome::Written(last));
                    }
                }
                Err(error) => match self.options.policy {
                    FailurePolicy::Abort => return Err(error),
                    FailurePolicy::Continue => {
                        report.failures.push(EntryFailure {
                            filename: entry.filename.clone(),
                            error,
                        });
                        if let Some(last) = report.failures.last() {
                            observe(Outcome::Failed(last));
                        }
                    }
                },
            }
        }

        Ok(report)
    }

    /// Resize and write a single entry.
    pub fn generate_entry(
        &self,
        master: &MasterImage,
        entry: &ManifestEntry,
        output_dir: &Path,
    ) -> Result<Generated> {
        let pixels = entry.pixel_size()?;
        let resized = master.resize(pixels, self.options.filter);

        let path = entry.path_in(output_dir);
        write_png(&resized, &path)?;

        Ok(Generated {
            filename: entry.filename.clone(),
            path,
            pixels,
        })
    }
}
