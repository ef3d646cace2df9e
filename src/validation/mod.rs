//! Validation of generated icons against a manifest.
//!
//! Cross-checks every manifest entry against the output directory. The
//! default presence mode only looks at file existence and size; strict mode
//! also decodes each file. Used by `iconset validate`.

mod checks;
mod result;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::manifest::Manifest;

pub use checks::{check_decoded, check_presence};
pub use result::{Failure, FailureReason, ValidationResult};

/// How thoroughly each file is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Existence and non-zero size only.
    #[default]
    Presence,
    /// Also decode the file and check dimensions and alpha.
    Strict,
}

/// Check every manifest entry against `output_dir`.
///
/// A missing `output_dir` reports every entry as missing.
pub fn validate(manifest: &Manifest, output_dir: &Path, mode: ValidationMode) -> ValidationResult {
    let mut result = ValidationResult::new();

    for entry in manifest.iter() {
        let path = entry.path_in(output_dir);
        let reason = checks::check_presence(&path).or_else(|| match mode {
            ValidationMode::Presence => None,
            ValidationMode::Strict => checks::check_decoded(&path, entry),
        });
        result.record(&entry.filename, reason);
    }

    result
}
