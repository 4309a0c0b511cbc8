//! Reference AM signal for comparing noise robustness against FM.

use std::f64::consts::TAU;

use crate::error::{ensure_non_negative, ensure_same_len, Result};
use crate::signal::{Signal, TimeBase};

/// Modulation depth μ used when none is given
pub const DEFAULT_AM_INDEX: f64 = 0.8;

/// s_am(t) = (1 + μ·m(t))·cos(2π·fc·t)
///
/// `normalized_message` must already lie in [-1, 1] (the raw waveform, before
/// amplitude scaling) so the envelope stays within 1 ± μ. This is a comparison
/// signal with the same message as the FM path, not a general AM model.
pub fn synthesize_am(
    times: &TimeBase,
    fc: f64,
    normalized_message: &[f64],
    modulation_index: f64,
) -> Result<Signal> {
    let fc = ensure_non_negative("fc", fc)?;
    let mu = ensure_non_negative("modulation_index", modulation_index)?;
    ensure_same_len(times.len(), normalized_message.len())?;

    let samples = times
        .as_slice()
        .iter()
        .zip(normalized_message)
        .map(|(&t, &m)| (1.0 + mu * m) * (TAU * fc * t).cos())
        .collect();

    Ok(Signal::new(samples, times.sample_rate()))
}
