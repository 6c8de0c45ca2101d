//! Error types for Spice.
//!
//! Uses thiserror for structured errors with context. Each concern gets its own
//! enum so callers can match precisely, and [`SpiceError`] wraps them all for
//! code that just wants to bubble failures up.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error type for Spice.
///
/// This enum encompasses all error categories and enables automatic
/// conversion between specific error types.
#[derive(Error, Debug)]
pub enum SpiceError {
    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Blur error: {0}")]
    Blur(#[from] BlurError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by matrix construction and element access.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatrixError {
    /// A coordinate fell outside the matrix and the overscan mode did not remap it.
    #[error("Cannot access {width}x{height} matrix at ({x}, {y})")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },

    #[error("Expected {} elements for a {width}x{height} matrix, got {actual}", .width * .height)]
    DataLength {
        width: usize,
        height: usize,
        actual: usize,
    },
}

/// Errors from the blur engine.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlurError {
    #[error("Cannot blur a {width}x{height} matrix with {passes} pass(es)")]
    DegenerateInput {
        width: usize,
        height: usize,
        passes: u32,
    },

    #[error("Blur radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
}

/// Errors while loading or validating a [`BlurConfig`](crate::filters::config::BlurConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Cannot serialize to TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

// ============================================================================
// Error Utilities
// ============================================================================

impl MatrixError {
    /// Check if this error came from an out-of-range access.
    pub fn is_boundary(&self) -> bool {
        matches!(self, MatrixError::OutOfBounds { .. })
    }
}

impl BlurError {
    /// Get suggestion for fixing this error.
    pub fn suggested_fix(&self) -> Option<String> {
        match self {
            BlurError::DegenerateInput { passes: 0, .. } => {
                Some("Use at least one blur pass (3 is a good default)".to_string())
            }
            BlurError::DegenerateInput { width, height, .. } => Some(format!(
                "Blur a non-empty matrix instead of a {}x{} one",
                width, height
            )),
            BlurError::InvalidRadius(_) => {
                Some("Pass a radius greater than zero".to_string())
            }
        }
    }
}

/// Result type alias for Spice operations.
pub type SpiceResult<T> = Result<T, SpiceError>;

/// Result type alias for matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Result type alias for blur operations.
pub type BlurResult<T> = Result<T, BlurError>;

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let error = MatrixError::OutOfBounds {
            x: -1,
            y: 3,
            width: 2,
            height: 2,
        };
        assert_eq!(error.to_string(), "Cannot access 2x2 matrix at (-1, 3)");
        assert!(error.is_boundary());
    }

    #[test]
    fn test_data_length_message() {
        let error = MatrixError::DataLength {
            width: 3,
            height: 2,
            actual: 5,
        };
        assert!(error.to_string().contains("Expected 6 elements"));
        assert!(!error.is_boundary());
    }

    #[test]
    fn test_blur_error_suggestions() {
        let error = BlurError::DegenerateInput {
            width: 4,
            height: 4,
            passes: 0,
        };
        assert!(error.suggested_fix().unwrap().contains("pass"));

        let error = BlurError::DegenerateInput {
            width: 0,
            height: 4,
            passes: 3,
        };
        assert!(error.suggested_fix().unwrap().contains("0x4"));
    }

    #[test]
    fn test_conversion_to_top_level() {
        let error: SpiceError = BlurError::InvalidRadius(-1.0).into();
        assert!(matches!(error, SpiceError::Blur(BlurError::InvalidRadius(_))));
        assert!(error.to_string().starts_with("Blur error"));
    }
}
