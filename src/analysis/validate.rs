//! Sampling adequacy checks.
//!
//! Both checks report through data, never through `Err`: an aliased signal can
//! still be computed and shown, and deciding whether to trust it belongs to
//! whoever displays it.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default minimum number of samples per message period
pub const MIN_SAMPLES_PER_PERIOD: f64 = 10.0;

/// Sample rate, as a multiple of fc, below which time plots look jagged
pub const SMOOTH_OVERSAMPLING: f64 = 10.0;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Ok,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
            Severity::Ok => write!(f, "ok"),
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
    pub severity: Severity,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
            severity: Severity::Ok,
        }
    }
}

/// Check that the FM spectral extent fc + Δf stays below Fs/2.
///
/// Passing the Nyquist test with Fs < 10·fc still earns a warning: the signal
/// is correct but a time plot connects too few points per carrier cycle.
pub fn validate_nyquist(fc: f64, delta_f: f64, sample_rate: f64) -> ValidationResult {
    let extent = fc + delta_f;
    let nyquist = sample_rate / 2.0;

    // written so NaN inputs fail the check
    if !(extent < nyquist) {
        tracing::warn!(extent, nyquist, "fm spectrum aliases");
        return ValidationResult {
            valid: false,
            message: format!(
                "Aliasing: fc + Δf = {:.2} kHz ≥ Fs/2 = {:.2} kHz. Raise Fs or lower fc, kf or Am.",
                extent / 1_000.0,
                nyquist / 1_000.0
            ),
            severity: Severity::Error,
        };
    }

    if sample_rate < SMOOTH_OVERSAMPLING * fc {
        return ValidationResult {
            valid: true,
            message: format!(
                "Suggestion: use Fs ≳ 10·fc ({:.2} MHz) for a steadier time-domain view.",
                SMOOTH_OVERSAMPLING * fc / 1_000_000.0
            ),
            severity: Severity::Warning,
        };
    }

    ValidationResult::ok()
}

/// Flag message periods covered by fewer than `min_samples` samples.
///
/// A sample rate that is not positive and finite cannot sample anything and
/// reports an error. Otherwise returns `None` when there is nothing to report,
/// including fm ≤ 0 where a period never ends.
pub fn validate_samples_per_period(
    sample_rate: f64,
    fm: f64,
    min_samples: f64,
) -> Option<ValidationResult> {
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        tracing::warn!(sample_rate, "sample rate cannot sample a message");
        return Some(ValidationResult {
            valid: false,
            message: format!("Invalid sample rate Fs = {sample_rate} Hz: it must be positive."),
            severity: Severity::Error,
        });
    }
    if !(fm > 0.0) {
        return None;
    }
    let per_period = sample_rate / fm;
    if per_period < min_samples {
        Some(ValidationResult {
            valid: true,
            message: format!(
                "Only {per_period:.1} samples per period of m(t). Raise Fs or lower fm for a smoother view."
            ),
            severity: Severity::Info,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nyquist_error() {
        let r = validate_nyquist(1e6, 5e3, 1e6);
        assert_eq!(r.severity, Severity::Error);
        assert!(!r.valid);
        assert!(r.message.contains("1005.00 kHz"));
    }

    #[test]
    fn test_nyquist_boundary_is_error() {
        // fc + Δf exactly at Fs/2 aliases
        let r = validate_nyquist(1e6, 0.0, 2e6);
        assert_eq!(r.severity, Severity::Error);
    }

    #[test]
    fn test_nyquist_ok() {
        let r = validate_nyquist(1e6, 5e3, 2.5e7);
        assert_eq!(r.severity, Severity::Ok);
        assert!(r.valid);
        assert!(r.message.is_empty());
    }

    #[test]
    fn test_nyquist_warning_when_coarse() {
        let r = validate_nyquist(1e6, 5e3, 5e6);
        assert_eq!(r.severity, Severity::Warning);
        assert!(r.valid);
    }

    #[test]
    fn test_nan_fails() {
        assert_eq!(validate_nyquist(f64::NAN, 0.0, 1e6).severity, Severity::Error);
    }

    #[test]
    fn test_samples_per_period() {
        let r = validate_samples_per_period(1e4, 2e3, MIN_SAMPLES_PER_PERIOD).unwrap();
        assert_eq!(r.severity, Severity::Info);
        assert!(r.message.contains("5.0"));

        assert!(validate_samples_per_period(1e7, 1e3, MIN_SAMPLES_PER_PERIOD).is_none());
        assert!(validate_samples_per_period(1e4, 1e3, MIN_SAMPLES_PER_PERIOD).is_none());
        assert!(validate_samples_per_period(1e4, 0.0, MIN_SAMPLES_PER_PERIOD).is_none());
    }

    #[test]
    fn test_unusable_sample_rate_is_error() {
        for fs in [0.0, -1e4, f64::NAN, f64::INFINITY] {
            let r = validate_samples_per_period(fs, 1e3, MIN_SAMPLES_PER_PERIOD).unwrap();
            assert_eq!(r.severity, Severity::Error);
            assert!(!r.valid);
            assert!(r.message.contains("Invalid sample rate"));
        }
    }
}
