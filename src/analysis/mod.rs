//! Measurement side of the lab: spectra, demodulation, quality metrics and
//! sampling checks.
//!
//! Everything here is a pure function of its inputs. Independent analyses of
//! the same signal (the message spectrum and the FM spectrum, or the FM and AM
//! receivers) share no state and can run on separate threads.

/// Phase-derivative FM and envelope AM receivers.
pub mod demod;
/// Analytic signal and phase unwrapping.
pub mod hilbert;
/// Error metrics and SNR quality bands.
pub mod metrics;
/// FFT magnitude spectrum.
pub mod spectrum;
/// Nyquist and samples-per-period checks.
pub mod validate;

pub use spectrum::{Spectrum, SpectrumAnalyzer};
pub use validate::{Severity, ValidationResult};
