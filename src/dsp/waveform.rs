//! Message waveform generators.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, FmError, Result};
use crate::signal::{Signal, TimeBase};

/*
Message Waveforms
=================

The message m(t) is the information we want to send. A pure sine makes FM look
deceptively tidy: one tone, one set of Bessel sidebands. Real messages have
harmonics, and the harmonics are what widen the FM spectrum. Each generator
here returns the normalized shape x(t) in [-1, +1]; the caller scales by the
message amplitude Am to get m(t) = Am · x(t).

All four shapes share the period T = 1/fm.

  Sine        x(t) = sin(2π·fm·t)
              Fundamental only.

  Square      x(t) = sgn(sin(2π·fm·t)),  sgn(0) := +1
              Odd harmonics falling as 1/n. Jumps twice per period, so the
              integrated FM phase has corners.

  Sawtooth    x(t) = 2·(t/T − ⌊t/T + ½⌋)
              Every harmonic, falling as 1/n. Linear ramp from −1 to +1 with a
              single jump per period (at t = T/2 mod T with this phase).

  Triangle    x(t) = 2·|sawtooth(t)| − 1
              Odd harmonics falling as 1/n². Continuous, peaks where the
              sawtooth jumps.

Harmonic count H
----------------

For a non-sinusoidal message the Carson bandwidth uses fm_max = H·fm, where H
counts the odd harmonics worth keeping (1, 3, 5, ... 15 in practice).
*/

/// Shape of the message waveform
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WaveformKind {
    #[default]
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl WaveformKind {
    pub const ALL: [WaveformKind; 4] = [
        WaveformKind::Sine,
        WaveformKind::Square,
        WaveformKind::Sawtooth,
        WaveformKind::Triangle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WaveformKind::Sine => "sine",
            WaveformKind::Square => "square",
            WaveformKind::Sawtooth => "sawtooth",
            WaveformKind::Triangle => "triangle",
        }
    }

    /// Next shape in `ALL`, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Evaluate the normalized shape at a single instant.
    ///
    /// `period` must be 1/fm; it is passed in so callers hoist the division.
    #[inline]
    pub fn sample(self, t: f64, fm: f64, period: f64) -> f64 {
        match self {
            WaveformKind::Sine => (TAU * fm * t).sin(),
            WaveformKind::Square => {
                if (TAU * fm * t).sin() >= 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
            WaveformKind::Sawtooth => sawtooth(t, period),
            WaveformKind::Triangle => 2.0 * sawtooth(t, period).abs() - 1.0,
        }
    }
}

#[inline]
fn sawtooth(t: f64, period: f64) -> f64 {
    let x = t / period;
    // rounding in `x + 0.5` can push the result one ulp past -1
    (2.0 * (x - (x + 0.5).floor())).clamp(-1.0, 1.0)
}

impl fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveformKind {
    type Err = ParseWaveformError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" | "sin" => Ok(WaveformKind::Sine),
            "square" | "sq" => Ok(WaveformKind::Square),
            "sawtooth" | "saw" => Ok(WaveformKind::Sawtooth),
            "triangle" | "tri" => Ok(WaveformKind::Triangle),
            _ => Err(ParseWaveformError(s.to_string())),
        }
    }
}

/// Returned when a waveform name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown waveform `{0}` (expected sine, square, sawtooth or triangle)")]
pub struct ParseWaveformError(pub String);

/// Normalized waveform x(t) in [-1, 1] on the given time base.
pub fn generate(times: &TimeBase, fm: f64, kind: WaveformKind) -> Result<Vec<f64>> {
    let fm = ensure_positive("fm", fm)?;
    let period = 1.0 / fm;
    Ok(times
        .as_slice()
        .iter()
        .map(|&t| kind.sample(t, fm, period))
        .collect())
}

/// Message m(t) = amplitude · x(t).
pub fn generate_message(
    times: &TimeBase,
    fm: f64,
    kind: WaveformKind,
    amplitude: f64,
) -> Result<Signal> {
    if !amplitude.is_finite() || amplitude < 0.0 {
        return Err(FmError::invalid(
            "amplitude",
            amplitude,
            "must be non-negative and finite",
        ));
    }
    let mut samples = generate(times, fm, kind)?;
    for x in samples.iter_mut() {
        *x *= amplitude;
    }
    Ok(Signal::new(samples, times.sample_rate()))
}
