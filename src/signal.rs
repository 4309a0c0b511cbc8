//! Sampled time base and real-valued signals.

use crate::error::{ensure_positive, FmError, Result};

/// Uniform sampling grid t[i] = i / Fs, starting at zero.
///
/// The last instant is one step short of `duration` (the grid never includes
/// the end point), so N = round(Fs · duration) samples cover exactly
/// `duration` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeBase {
    sample_rate: f64,
    times: Vec<f64>,
}

impl TimeBase {
    /// Build the grid for `duration` seconds sampled at `sample_rate` Hz.
    pub fn new(sample_rate: f64, duration: f64) -> Result<Self> {
        let sample_rate = ensure_positive("sample_rate", sample_rate)?;
        let duration = ensure_positive("duration", duration)?;

        let n = (sample_rate * duration).round();
        if n < 1.0 {
            return Err(FmError::invalid(
                "duration",
                duration,
                "shorter than one sample period",
            ));
        }
        let n = n as usize;
        let times = (0..n).map(|i| i as f64 / sample_rate).collect();

        Ok(Self { sample_rate, times })
    }

    #[inline]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Sample step 1/Fs
    #[inline]
    pub fn dt(&self) -> f64 {
        1.0 / self.sample_rate
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Covered duration in seconds (N / Fs)
    pub fn duration(&self) -> f64 {
        self.times.len() as f64 / self.sample_rate
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.times
    }

    /// First index whose instant is at or after `time`, clamped to `len()`.
    pub fn index_at(&self, time: f64) -> usize {
        self.times.partition_point(|&t| t < time)
    }

    /// Evaluate `f` at every instant, producing a signal on this grid.
    pub fn map<F: FnMut(f64) -> f64>(&self, f: F) -> Signal {
        Signal::new(self.times.iter().copied().map(f).collect(), self.sample_rate)
    }
}

/// Finite sequence of real samples at a fixed sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub samples: Vec<f64>,
    pub sample_rate: f64,
}

impl Signal {
    pub fn new(samples: Vec<f64>, sample_rate: f64) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Mean of the squared samples (0 for an empty signal)
    pub fn power(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().map(|x| x * x).sum::<f64>() / self.samples.len() as f64
    }

    /// Arithmetic mean (0 for an empty signal)
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Largest absolute sample value
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()))
    }
}
