use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for iconset operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("Failed to load manifest {path}: {message}")]
    #[diagnostic(
        code(iconset::manifest),
        help("The manifest must be a JSON object with an `images` array")
    )]
    ManifestLoad { path: PathBuf, message: String },

    #[error("Duplicate filename '{filename}' in manifest {path}")]
    #[diagnostic(
        code(iconset::manifest::duplicate),
        help("Each manifest entry must write to its own file")
    )]
    DuplicateFilename { path: PathBuf, filename: String },

    #[error("Invalid {field} '{value}': {message}")]
    #[diagnostic(code(iconset::size))]
    SizeParse {
        field: &'static str,
        value: String,
        message: String,
    },

    #[error("Failed to read master image {path}: {message}")]
    #[diagnostic(code(iconset::master))]
    MasterImage { path: PathBuf, message: String },

    #[error("Output directory {path} does not exist")]
    #[diagnostic(
        code(iconset::output_dir),
        help("Create the asset catalog directory before generating")
    )]
    OutputDir { path: PathBuf },

    #[error("Failed to write {path}: {message}")]
    #[diagnostic(code(iconset::write))]
    Write { path: PathBuf, message: String },

    #[error("Invalid config {path}: {message}")]
    #[diagnostic(code(iconset::config), help("Check iconset.yaml syntax"))]
    Config { path: PathBuf, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(iconset::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(iconset::io))]
    Io { path: PathBuf, message: String },

    #[error("Generation failed for {failed} of {total} entries")]
    #[diagnostic(code(iconset::generate))]
    GenerationFailed { failed: usize, total: usize },

    #[error("Validation failed: {failed} of {total} entries missing or invalid")]
    #[diagnostic(code(iconset::validate))]
    ValidationFailed { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, IconError>;
