//! User-facing settings for one analysis pass.
//!
//! All values are in base SI units (Hz, V, s). Front-ends that show MHz or kHz
//! sliders convert before filling this in.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::waveform::WaveformKind;
use crate::error::{ensure_non_negative, ensure_positive, FmError, Result};
use crate::params::sensitivity_for_beta;

/// Largest odd-harmonic count the Carson estimate is offered with
pub const MAX_HARMONICS: u32 = 15;

/// How the frequency deviation is specified
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Deviation {
    /// Target modulation index β; kf is derived as β·fm/Am
    Beta(f64),
    /// Frequency sensitivity kf in Hz/V
    Sensitivity(f64),
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ModulationConfig {
    pub waveform: WaveformKind,
    /// Sample rate Fs (Hz)
    pub sample_rate: f64,
    /// Signal length (s)
    pub duration: f64,
    /// Carrier frequency fc (Hz)
    pub carrier_hz: f64,
    /// Message frequency fm (Hz)
    pub message_hz: f64,
    /// Message amplitude Am (V)
    pub amplitude: f64,
    pub deviation: Deviation,
    /// Odd harmonics counted in fm_max = H·fm
    pub harmonics: u32,
    /// Channel SNR for the demodulation comparison (dB)
    pub snr_db: f64,
    /// Seed for the channel noise
    pub seed: u64,
}

impl Default for ModulationConfig {
    fn default() -> Self {
        Self {
            waveform: WaveformKind::Sine,
            sample_rate: 10_000_000.0,
            duration: 0.005,
            carrier_hz: 1_000_000.0,
            message_hz: 1_000.0,
            amplitude: 1.0,
            deviation: Deviation::Beta(5.0),
            harmonics: 1,
            snr_db: 20.0,
            seed: 42,
        }
    }
}

impl ModulationConfig {
    pub fn with_waveform(mut self, waveform: WaveformKind) -> Self {
        self.waveform = waveform;
        self
    }

    pub fn with_sampling(mut self, sample_rate: f64, duration: f64) -> Self {
        self.sample_rate = sample_rate;
        self.duration = duration;
        self
    }

    pub fn with_carrier(mut self, carrier_hz: f64) -> Self {
        self.carrier_hz = carrier_hz;
        self
    }

    pub fn with_message(mut self, message_hz: f64, amplitude: f64) -> Self {
        self.message_hz = message_hz;
        self.amplitude = amplitude;
        self
    }

    pub fn with_deviation(mut self, deviation: Deviation) -> Self {
        self.deviation = deviation;
        self
    }

    pub fn with_harmonics(mut self, harmonics: u32) -> Self {
        self.harmonics = harmonics;
        self
    }

    pub fn with_snr(mut self, snr_db: f64) -> Self {
        self.snr_db = snr_db;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Frequency sensitivity kf (Hz/V), resolving a β setting if needed
    pub fn sensitivity(&self) -> f64 {
        match self.deviation {
            Deviation::Sensitivity(kf) => kf,
            Deviation::Beta(beta) => sensitivity_for_beta(beta, self.message_hz, self.amplitude),
        }
    }

    /// Reject settings no analysis pass can run with.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("sample_rate", self.sample_rate)?;
        ensure_positive("duration", self.duration)?;
        ensure_non_negative("fc", self.carrier_hz)?;
        ensure_positive("fm", self.message_hz)?;
        ensure_non_negative("amplitude", self.amplitude)?;
        match self.deviation {
            Deviation::Beta(beta) => ensure_non_negative("beta", beta)?,
            Deviation::Sensitivity(kf) => ensure_non_negative("kf", kf)?,
        };
        if self.harmonics == 0 || self.harmonics % 2 == 0 || self.harmonics > MAX_HARMONICS {
            return Err(FmError::invalid(
                "harmonics",
                self.harmonics as f64,
                "must be an odd count between 1 and 15",
            ));
        }
        if !self.snr_db.is_finite() {
            return Err(FmError::invalid("snr_db", self.snr_db, "must be finite"));
        }
        Ok(())
    }
}
