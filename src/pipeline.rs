//! One complete analysis pass from a [`ModulationConfig`].
//!
//! The pass follows the signal chain end to end:
//!
//! ```text
//! time base → message → parameters ─┬→ FM  → spectrum
//!                                   │    └→ noise → demod ─┐
//!                                   └→ AM  → noise → demod ─┴→ MSE comparison
//! ```
//!
//! The FM and AM branches read the same immutable inputs and share nothing
//! else. Noise is seeded explicitly so a pass is reproducible.

use tracing::{debug, instrument};

use crate::analysis::demod::{demodulate_am, demodulate_fm};
use crate::analysis::metrics::{mean_squared_error, DemodComparison};
use crate::analysis::spectrum::{DisplayRange, Spectrum, SpectrumAnalyzer};
use crate::analysis::validate::{
    validate_nyquist, validate_samples_per_period, ValidationResult, MIN_SAMPLES_PER_PERIOD,
};
use crate::config::ModulationConfig;
use crate::dsp::am::{synthesize_am, DEFAULT_AM_INDEX};
use crate::dsp::fm::{carrier, synthesize_fm, FmSignal};
use crate::dsp::noise::add_noise_for_snr;
use crate::dsp::waveform::generate;
use crate::error::Result;
use crate::params::ModulationParameters;
use crate::signal::{Signal, TimeBase};

/// Message periods shown in the FM zoom view
pub const FM_ZOOM_PERIODS: f64 = 3.0;

/// Carrier periods shown in the carrier zoom view
pub const CARRIER_ZOOM_PERIODS: f64 = 50.0;

/// Lengths (s) of the zoomed time-domain views, never longer than the signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomWindows {
    pub fm_view: f64,
    pub carrier_view: f64,
}

impl ZoomWindows {
    pub fn new(fc: f64, fm: f64, duration: f64) -> Self {
        Self {
            fm_view: window(FM_ZOOM_PERIODS, fm, duration),
            carrier_view: window(CARRIER_ZOOM_PERIODS, fc, duration),
        }
    }
}

fn window(periods: f64, frequency: f64, duration: f64) -> f64 {
    if frequency > 0.0 {
        (periods / frequency).min(duration)
    } else {
        duration
    }
}

/// m/Am, or silence when no message is sent.
fn normalize_amplitude(message: &[f64], amplitude: f64) -> Vec<f64> {
    if amplitude > 0.0 {
        message.iter().map(|m| m / amplitude).collect()
    } else {
        vec![0.0; message.len()]
    }
}

/// Everything one pass produces, ready to be plotted.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub config: ModulationConfig,
    pub times: TimeBase,
    /// m(t) = Am·x(t)
    pub message: Signal,
    /// m(t)/Am in [-1, 1] (all zero when Am = 0); both branches transmit it
    /// and the demodulated outputs are scored against it
    pub normalized_message: Signal,
    pub params: ModulationParameters,
    pub fm: FmSignal,
    /// Unmodulated cos(2π·fc·t) for comparison plots
    pub carrier: Signal,
    pub am: Signal,
    pub nyquist: ValidationResult,
    pub sampling: Option<ValidationResult>,
    pub display: DisplayRange,
    pub zoom: ZoomWindows,
    pub message_spectrum: Spectrum,
    pub fm_spectrum: Spectrum,
    pub noisy_fm: Signal,
    pub noisy_am: Signal,
    pub recovered_fm: Signal,
    pub recovered_am: Signal,
    pub comparison: DemodComparison,
}

impl Analysis {
    /// Run a pass with a fresh spectrum analyzer.
    pub fn run(config: &ModulationConfig) -> Result<Self> {
        Self::run_with(config, &mut SpectrumAnalyzer::new())
    }

    /// Run a pass, reusing `analyzer`'s FFT plans.
    ///
    /// Front-ends that re-run on every key press keep one analyzer around so
    /// an unchanged length is not planned again.
    #[instrument(skip_all, fields(waveform = %config.waveform, snr_db = config.snr_db))]
    pub fn run_with(config: &ModulationConfig, analyzer: &mut SpectrumAnalyzer) -> Result<Self> {
        config.validate()?;

        let fc = config.carrier_hz;
        let fm = config.message_hz;
        let kf = config.sensitivity();

        let times = TimeBase::new(config.sample_rate, config.duration)?;
        let message: Vec<f64> = generate(&times, fm, config.waveform)?
            .into_iter()
            .map(|x| x * config.amplitude)
            .collect();
        let normalized = normalize_amplitude(&message, config.amplitude);

        let params = ModulationParameters::compute(fc, fm, config.amplitude, kf, config.harmonics)?;
        let nyquist = validate_nyquist(fc, params.delta_f, config.sample_rate);
        let sampling = validate_samples_per_period(config.sample_rate, fm, MIN_SAMPLES_PER_PERIOD);

        let fm_signal = synthesize_fm(&times, fc, kf, &message)?;
        let carrier = carrier(&times, fc)?;
        let am = synthesize_am(&times, fc, &normalized, DEFAULT_AM_INDEX)?;

        let message = Signal::new(message, times.sample_rate());
        let normalized_message = Signal::new(normalized, times.sample_rate());

        let display = DisplayRange::for_parameters(&params);
        let message_spectrum = analyzer.analyze(&message, Some(display.message_max))?;
        let fm_spectrum = analyzer.analyze(&fm_signal.signal, Some(display.modulated_max))?;

        let noisy_fm = add_noise_for_snr(&fm_signal.signal, config.snr_db, config.seed)?;
        let noisy_am = add_noise_for_snr(&am, config.snr_db, config.seed.wrapping_add(1))?;

        let recovered_fm = demodulate_fm(&noisy_fm, fc)?;
        let recovered_am = demodulate_am(&noisy_am, fc)?;

        let comparison = DemodComparison::new(
            config.snr_db,
            mean_squared_error(&normalized_message.samples, &recovered_fm.samples)?,
            mean_squared_error(&normalized_message.samples, &recovered_am.samples)?,
        );
        debug!(
            samples = times.len(),
            beta = params.beta,
            mse_fm = comparison.mse_fm,
            mse_am = comparison.mse_am,
            "analysis pass complete"
        );

        Ok(Self {
            config: config.clone(),
            zoom: ZoomWindows::new(fc, fm, times.duration()),
            times,
            message,
            normalized_message,
            params,
            fm: fm_signal,
            carrier,
            am,
            nyquist,
            sampling,
            display,
            message_spectrum,
            fm_spectrum,
            noisy_fm,
            noisy_am,
            recovered_fm,
            recovered_am,
            comparison,
        })
    }

    /// (t, y) pairs of `signal` over the first `window` seconds
    pub fn zoomed(&self, signal: &Signal, window: f64) -> Vec<(f64, f64)> {
        let end = self.times.index_at(window).min(signal.len());
        self.times.as_slice()[..end]
            .iter()
            .copied()
            .zip(signal.samples[..end].iter().copied())
            .collect()
    }
}
