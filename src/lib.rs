//! iconset - App icon set generator and validator
//!
//! A library for turning one master image into every icon an asset catalog
//! manifest (`Contents.json`) asks for, and for checking that a catalog
//! directory actually contains those files.

pub mod cli;
pub mod colour;
pub mod config;
pub mod error;
pub mod generate;
pub mod manifest;
pub mod output;
pub mod transform;
pub mod validation;

pub use colour::Colour;
pub use config::{Config, CONFIG_FILENAME};
pub use error::{IconError, Result};
pub use generate::{
    FailurePolicy, GenerateOptions, GenerateReport, Generated, Generator, MasterImage,
    ResampleFilter,
};
pub use manifest::{resolve, Manifest, ManifestEntry, MANIFEST_FILENAME};
pub use validation::{validate, Failure, FailureReason, ValidationMode, ValidationResult};
