//! Validation outcome types.

use std::fmt;

use serde::Serialize;

/// Why a manifest entry failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum FailureReason {
    /// No file exists at the expected path.
    Missing,
    /// The file exists but is zero bytes (usually an interrupted write).
    Empty,
    /// Strict mode: the entry's size or scale could not be resolved.
    InvalidSize { message: String },
    /// Strict mode: the file could not be decoded as an image.
    Undecodable { message: String },
    /// Strict mode: the decoded image has the wrong dimensions.
    WrongSize { expected: u32, width: u32, height: u32 },
    /// Strict mode: the decoded image carries an alpha channel.
    HasAlpha,
}

impl FailureReason {
    /// Short tag for status output.
    pub fn label(&self) -> &'static str {
        match self {
            FailureReason::Missing => "Missing",
            FailureReason::Empty => "Empty",
            FailureReason::InvalidSize { .. } => "Invalid",
            FailureReason::Undecodable { .. } => "Corrupt",
            FailureReason::WrongSize { .. } => "Mis-sized",
            FailureReason::HasAlpha => "Alpha",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Missing => write!(f, "missing"),
            FailureReason::Empty => write!(f, "empty, 0 bytes"),
            FailureReason::InvalidSize { message } => write!(f, "invalid size: {}", message),
            FailureReason::Undecodable { message } => write!(f, "cannot be decoded: {}", message),
            FailureReason::WrongSize {
                expected,
                width,
                height,
            } => write!(
                f,
                "is {}x{}, expected {}x{}",
                width, height, expected, expected
            ),
            FailureReason::HasAlpha => write!(f, "has an alpha channel"),
        }
    }
}

/// A failing manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub filename: String,
    #[serde(flatten)]
    pub reason: FailureReason,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.filename, self.reason)
    }
}

/// Outcome of validating a manifest against an output directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    checked: usize,
    failures: Vec<Failure>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of checking one entry.
    pub fn record(&mut self, filename: &str, reason: Option<FailureReason>) {
        self.checked += 1;
        if let Some(reason) = reason {
            self.failures.push(Failure {
                filename: filename.to_string(),
                reason,
            });
        }
    }

    /// True when every entry passed.
    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of entries checked.
    pub fn checked(&self) -> usize {
        self.checked
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Count failures with the given reason.
    pub fn count(&self, reason: &FailureReason) -> usize {
        self.failures.iter().filter(|f| &f.reason == reason).count()
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn iter(&self) -> impl Iterator<Item = &Failure> {
        self.failures.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = ValidationResult::new();
        assert!(result.success());
        assert_eq!(result.checked(), 0);
        assert_eq!(result.failure_count(), 0);
    }

    #[test]
    fn test_record_pass_and_fail() {
        let mut result = ValidationResult::new();
        result.record("a.png", None);
        result.record("b.png", Some(FailureReason::Missing));
        result.record("c.png", Some(FailureReason::Empty));

        assert!(!result.success());
        assert_eq!(result.checked(), 3);
        assert_eq!(result.failure_count(), 2);
        assert_eq!(result.count(&FailureReason::Missing), 1);
        assert_eq!(result.count(&FailureReason::Empty), 1);
    }

    #[test]
    fn test_failure_display() {
        let missing = Failure {
            filename: "Icon@2x.png".to_string(),
            reason: FailureReason::Missing,
        };
        assert_eq!(missing.to_string(), "Icon@2x.png (missing)");

        let sized = Failure {
            filename: "Icon@3x.png".to_string(),
            reason: FailureReason::WrongSize {
                expected: 87,
                width: 58,
                height: 58,
            },
        };
        assert_eq!(sized.to_string(), "Icon@3x.png (is 58x58, expected 87x87)");
    }

    #[test]
    fn test_failure_json() {
        let failure = Failure {
            filename: "a.png".to_string(),
            reason: FailureReason::Empty,
        };
        insta::assert_json_snapshot!(failure, @r###"
        {
          "filename": "a.png",
          "reason": "empty"
        }
        "###);
    }
}
