//! FM synthesis by phase integration.

use std::f64::consts::TAU;

use crate::error::{ensure_non_negative, ensure_same_len, Result};
use crate::signal::{Signal, TimeBase};

/*
Frequency Modulation
====================

FM keeps the carrier amplitude fixed and pushes its frequency around with the
message:

    fi(t) = fc + kf · m(t)

Phase is the integral of frequency, so the transmitted signal is

    φ(t) = 2π·fc·t + 2π·kf · ∫₀ᵗ m(τ) dτ
    s(t) = cos(φ(t))

Vocabulary
----------

  fc     carrier frequency (Hz)
  kf     frequency sensitivity (Hz per volt of message)
  Δf     peak deviation = kf · max|m(t)|
  β      modulation index = Δf / fm

Discrete Integration
--------------------

On a sampled grid the integral becomes a running sum:

    φ[n] = 2π·fc·t[n] + 2π·kf·dt · Σ_{k=0..n} m[k]

The sum includes the current sample (a left-inclusive rectangle rule). It is
an approximation, not exact integration: for a message with non-zero mean the
error grows linearly with n, and a square message puts corners in φ. Both
are accepted here. The phase difference between consecutive samples is exactly
2π·(fc + kf·m[n])·dt, which is what a phase-derivative demodulator measures.

The instantaneous frequency is reported from the closed form fc + kf·m(t)
rather than by differentiating φ, so the plotted fi(t) carries no numerical
error of its own.
*/

/// Output of [`synthesize_fm`]
#[derive(Debug, Clone, PartialEq)]
pub struct FmSignal {
    /// s(t) = cos(φ(t))
    pub signal: Signal,
    /// fi(t) = fc + kf·m(t), in Hz
    pub instantaneous_frequency: Signal,
    /// φ(t), in radians (unwrapped)
    pub phase: Vec<f64>,
}

/// Modulate `message` onto a carrier at `fc` with sensitivity `kf`.
///
/// The integration step is the time base's 1/Fs.
pub fn synthesize_fm(times: &TimeBase, fc: f64, kf: f64, message: &[f64]) -> Result<FmSignal> {
    let fc = ensure_non_negative("fc", fc)?;
    let kf = ensure_non_negative("kf", kf)?;
    ensure_same_len(times.len(), message.len())?;

    let dt = times.dt();
    let fs = times.sample_rate();

    let mut phase = Vec::with_capacity(message.len());
    let mut integral = 0.0;
    for (&t, &m) in times.as_slice().iter().zip(message) {
        integral += m;
        phase.push(TAU * fc * t + TAU * kf * integral * dt);
    }

    let signal = phase.iter().map(|p| p.cos()).collect();
    let instantaneous_frequency = message.iter().map(|m| fc + kf * m).collect();

    Ok(FmSignal {
        signal: Signal::new(signal, fs),
        instantaneous_frequency: Signal::new(instantaneous_frequency, fs),
        phase,
    })
}

/// Unmodulated carrier c(t) = cos(2π·fc·t)
pub fn carrier(times: &TimeBase, fc: f64) -> Result<Signal> {
    let fc = ensure_non_negative("fc", fc)?;
    Ok(times.map(|t| (TAU * fc * t).cos()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::waveform::{generate, WaveformKind};

    #[test]
    fn test_zero_message_is_carrier() {
        let t = TimeBase::new(1_000_000.0, 0.001).unwrap();
        let m = vec![0.0; t.len()];
        let fm = synthesize_fm(&t, 50_000.0, 5_000.0, &m).unwrap();
        let c = carrier(&t, 50_000.0).unwrap();
        for (a, b) in fm.signal.samples.iter().zip(&c.samples) {
            assert!((a - b).abs() < 1e-12);
        }
        assert!(fm.instantaneous_frequency.samples.iter().all(|&f| f == 50_000.0));
    }

    #[test]
    fn test_instantaneous_frequency_closed_form() {
        let t = TimeBase::new(100_000.0, 0.01).unwrap();
        let m = generate(&t, 200.0, WaveformKind::Triangle).unwrap();
        let fm = synthesize_fm(&t, 10_000.0, 2_000.0, &m).unwrap();
        for (fi, x) in fm.instantaneous_frequency.samples.iter().zip(&m) {
            assert!((fi - (10_000.0 + 2_000.0 * x)).abs() < 1e-9);
        }
        let peak = fm.instantaneous_frequency.peak();
        assert!(peak <= 12_000.0 + 1e-9);
    }

    #[test]
    fn test_phase_increments_track_frequency() {
        let fs = 1_000_000.0;
        let t = TimeBase::new(fs, 0.002).unwrap();
        let m = generate(&t, 1_000.0, WaveformKind::Sine).unwrap();
        let fm = synthesize_fm(&t, 100_000.0, 5_000.0, &m).unwrap();
        for n in 1..t.len() {
            let step = fm.phase[n] - fm.phase[n - 1];
            let expected = TAU * (100_000.0 + 5_000.0 * m[n]) / fs;
            assert!((step - expected).abs() < 1e-6, "sample {n}");
        }
    }

    #[test]
    fn test_output_bounded_and_aligned() {
        let t = TimeBase::new(48_000.0, 0.01).unwrap();
        let m = generate(&t, 100.0, WaveformKind::Square).unwrap();
        let fm = synthesize_fm(&t, 5_000.0, 1_000.0, &m).unwrap();
        assert_eq!(fm.signal.len(), t.len());
        assert_eq!(fm.phase.len(), t.len());
        assert!(fm.signal.samples.iter().all(|v| v.abs() <= 1.0));
    }

    #[test]
    fn test_rejects_mismatched_message() {
        let t = TimeBase::new(48_000.0, 0.01).unwrap();
        assert!(synthesize_fm(&t, 5_000.0, 1_000.0, &[0.0; 3]).is_err());
        assert!(carrier(&t, -1.0).is_err());
    }
}
