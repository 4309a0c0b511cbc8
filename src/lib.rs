//! Frequency modulation, taught by computing it.
//!
//! The crate generates a message, modulates it onto a carrier (FM, plus AM as
//! a reference), looks at both in frequency, pushes them through a noisy
//! channel and demodulates them again. Everything is a batch computation over
//! an in-memory buffer; plotting is left to whoever calls in.
//!
//! ```no_run
//! use fm_lab::{Analysis, ModulationConfig};
//!
//! let analysis = Analysis::run(&ModulationConfig::default())?;
//! println!("β = {:.2}, FM MSE = {:.4}", analysis.params.beta, analysis.comparison.mse_fm);
//! # Ok::<(), fm_lab::FmError>(())
//! ```

pub mod analysis; // Spectrum, demodulation, metrics and sampling checks
pub mod config;
pub mod dsp; // Waveforms, FM/AM synthesis and channel noise
pub mod error;
pub mod params;
pub mod pipeline;
pub mod signal;

pub use analysis::demod::{demodulate_am, demodulate_fm};
pub use analysis::metrics::{mean_squared_error, DemodComparison, SnrQuality};
pub use analysis::spectrum::{compute_spectrum, DisplayRange, Spectrum, SpectrumAnalyzer};
pub use analysis::validate::{
    validate_nyquist, validate_samples_per_period, Severity, ValidationResult,
    MIN_SAMPLES_PER_PERIOD,
};
pub use config::{Deviation, ModulationConfig};
pub use dsp::am::{synthesize_am, DEFAULT_AM_INDEX};
pub use dsp::fm::{carrier as compute_carrier, synthesize_fm, FmSignal};
pub use dsp::noise::add_noise_for_snr;
pub use dsp::waveform::{generate, generate_message, WaveformKind};
pub use error::{FmError, Result};
pub use params::ModulationParameters;
pub use pipeline::{Analysis, ZoomWindows};
pub use signal::{Signal, TimeBase};

/// Free-function form of [`ModulationParameters::compute`].
pub fn compute_modulation_parameters(
    fc: f64,
    fm: f64,
    amplitude: f64,
    kf: f64,
    harmonics: u32,
) -> Result<ModulationParameters> {
    ModulationParameters::compute(fc, fm, amplitude, kf, harmonics)
}
