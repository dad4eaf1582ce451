//! Error types for u-staffing.
//!
//! An infeasible day is not an error: it simply yields no assignments.
//! Errors are reserved for input that cannot be processed at all.

use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type.
#[derive(Error, Debug)]
pub enum StaffingError {
    /// Malformed input text.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number of the offending line.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// Input parsed but is not schedulable.
    #[error("invalid input: {}", format_validation(.0))]
    Validation(Vec<ValidationError>),

    /// Invalid scheduler configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be decoded.
    #[error("configuration file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// File I/O errors.
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type.
pub type Result<T> = std::result::Result<T, StaffingError>;

impl StaffingError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_parse_error_display() {
        let err = StaffingError::parse(3, "expected an integer, got 'x'");
        assert_eq!(err.to_string(), "line 3: expected an integer, got 'x'");
    }

    #[test]
    fn test_validation_error_display() {
        let err = StaffingError::Validation(vec![
            ValidationError::new(ValidationErrorKind::DuplicateName, "Duplicate project name: P"),
            ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                "Project 'Q' has zero duration",
            ),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: Duplicate project name: P; Project 'Q' has zero duration"
        );
    }
}
