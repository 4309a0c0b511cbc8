//! Error types shared by every stage of the analysis pass.

use thiserror::Error;

/// Result type for fallible signal operations
pub type Result<T> = std::result::Result<T, FmError>;

/// Errors raised when a computation cannot produce a meaningful signal.
///
/// Numerical corner cases (an all-zero signal fed to normalization, β at
/// fm = 0) are not errors; they resolve to sentinel values instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FmError {
    /// A parameter is outside the domain where the math is defined
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Two buffers that must be sample-aligned have different lengths
    #[error("buffer length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The noise distribution could not be constructed
    #[error("noise generation failed: {0}")]
    Noise(String),
}

impl FmError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        FmError::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// Check if this error was caused by caller-supplied configuration
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, FmError::InvalidParameter { .. })
    }
}

/// Reject zero, negative, NaN and infinite values.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FmError::invalid(name, value, "must be positive and finite"))
    }
}

/// Reject negative, NaN and infinite values.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FmError::invalid(name, value, "must be non-negative and finite"))
    }
}

pub(crate) fn ensure_same_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(FmError::LengthMismatch { expected, actual })
    }
}
