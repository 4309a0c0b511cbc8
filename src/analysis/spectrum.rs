//! Band-limited magnitude spectrum via FFT.

use std::sync::Arc;

use rustfft::{num_complex::Complex, Fft, FftPlanner};

use crate::error::{FmError, Result};
use crate::params::ModulationParameters;
use crate::signal::Signal;

/// Added to linear magnitudes before taking the log, so silent bins map to
/// -240 dB instead of -∞.
pub const DB_FLOOR_EPSILON: f64 = 1e-12;

/*
One-sided spectrum without folding
==================================

The analyzer keeps only the non-negative half of the FFT: bins k = 0 .. ⌈N/2⌉,
at frequency k·Fs/N. For even N the Nyquist bin counts as negative and is
dropped, so the retained axis matches the non-negative entries of the usual
`fftfreq` ordering.

Magnitude is |X[k]| / N. The customary ×2 that folds negative-frequency energy
into a single-sided spectrum is NOT applied: a unit cosine shows up at 0.5
(-6 dB), not 1.0. This mirrors the behaviour the plots were calibrated
against. It may have started as an omission, so treat absolute levels as
relative and compare bins against each other.

No window is applied either. A tone that does not complete an integer number
of cycles in the buffer leaks into neighbouring bins; that leakage is part of
what the plots show.
*/

/// Frequency axis with linear and dB magnitudes, all the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    pub frequencies: Vec<f64>,
    pub magnitude: Vec<f64>,
    pub magnitude_db: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Frequency and linear magnitude of the strongest bin
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.magnitude
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, &mag)| (self.frequencies[i], mag))
    }

    /// Index of the bin closest to `frequency`
    pub fn nearest_bin(&self, frequency: f64) -> Option<usize> {
        self.frequencies
            .iter()
            .enumerate()
            .min_by(|a, b| (a.1 - frequency).abs().total_cmp(&(b.1 - frequency).abs()))
            .map(|(i, _)| i)
    }

    /// (frequency, dB) pairs for plotting
    pub fn db_points(&self) -> Vec<(f64, f64)> {
        self.frequencies
            .iter()
            .copied()
            .zip(self.magnitude_db.iter().copied())
            .collect()
    }
}

/// FFT spectrum analyzer that keeps its planner between calls.
///
/// Planning is the expensive part of an FFT of a new length; re-analyzing
/// buffers of the same length reuses the cached plan.
pub struct SpectrumAnalyzer {
    planner: FftPlanner<f64>,
    /// Last plan handed out, reused while the length stays the same
    fft: Option<Arc<dyn Fft<f64>>>,
}

impl SpectrumAnalyzer {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
            fft: None,
        }
    }

    fn plan(&mut self, len: usize) -> Arc<dyn Fft<f64>> {
        match &self.fft {
            Some(fft) if fft.len() == len => Arc::clone(fft),
            _ => {
                let fft = self.planner.plan_fft_forward(len);
                self.fft = Some(Arc::clone(&fft));
                fft
            }
        }
    }

    /// Spectrum of `signal`, truncated to frequencies ≤ `max_frequency` if given.
    pub fn analyze(&mut self, signal: &Signal, max_frequency: Option<f64>) -> Result<Spectrum> {
        let n = signal.len();
        if n == 0 {
            return Err(FmError::invalid("signal", 0.0, "cannot analyze an empty signal"));
        }
        if !(signal.sample_rate.is_finite() && signal.sample_rate > 0.0) {
            return Err(FmError::invalid(
                "sample_rate",
                signal.sample_rate,
                "must be positive and finite",
            ));
        }

        let fft = self.plan(n);
        let mut buffer: Vec<Complex<f64>> = signal
            .samples
            .iter()
            .map(|&x| Complex::new(x, 0.0))
            .collect();
        fft.process(&mut buffer);

        let bin_width = signal.sample_rate / n as f64;
        let positive_bins = n.div_ceil(2);
        let mut keep = positive_bins;
        if let Some(limit) = max_frequency {
            // frequencies grow with k, so the cutoff is a prefix
            keep = (0..positive_bins)
                .take_while(|&k| k as f64 * bin_width <= limit)
                .count();
        }

        let scale = 1.0 / n as f64;
        let mut frequencies = Vec::with_capacity(keep);
        let mut magnitude = Vec::with_capacity(keep);
        let mut magnitude_db = Vec::with_capacity(keep);
        for (k, bin) in buffer.iter().take(keep).enumerate() {
            let mag = bin.norm() * scale;
            frequencies.push(k as f64 * bin_width);
            magnitude.push(mag);
            magnitude_db.push(20.0 * (mag + DB_FLOOR_EPSILON).log10());
        }

        Ok(Spectrum {
            frequencies,
            magnitude,
            magnitude_db,
        })
    }
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot spectrum with a throwaway planner.
pub fn compute_spectrum(signal: &Signal, max_frequency: Option<f64>) -> Result<Spectrum> {
    SpectrumAnalyzer::new().analyze(signal, max_frequency)
}

/// Upper frequency limits that frame each spectrum plot usefully.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRange {
    /// Message spectrum: 20·fm, enough for the first ten odd harmonics
    pub message_max: f64,
    /// FM spectrum: fc + 2·B_carson, the carrier plus both Carson skirts
    pub modulated_max: f64,
}

impl DisplayRange {
    pub fn for_parameters(params: &ModulationParameters) -> Self {
        Self {
            message_max: 20.0 * params.message_hz,
            modulated_max: params.carrier_hz + 2.0 * params.carson_bandwidth,
        }
    }
}
