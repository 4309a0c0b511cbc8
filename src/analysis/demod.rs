//! Offline FM and AM demodulation through the analytic signal.

use std::f64::consts::TAU;

use tracing::debug;

use crate::analysis::hilbert::{analytic_signal, unwrap_phase};
use crate::error::{FmError, Result};
use crate::signal::Signal;

/*
Two receivers, one building block
=================================

Both demodulators start from z = x + j·H{x}.

FM: phase-derivative discriminator
    φ(t)   = unwrap(arg z(t))
    fi(t)  = (1/2π)·dφ/dt           ≈ (φ[n] - φ[n-1])·Fs/2π
    m̂(t)  = fi(t) - fc              (strip the carrier)

    The first difference has N-1 values; the first one is repeated at the
    front to keep length N.

AM: envelope detector
    e(t)   = |z(t)|
    m̂(t)  = e(t) - mean(e)          (strip the DC carrier level)

Both outputs are scaled by their largest absolute value so they can be laid
over the normalized message. This is a batch receiver: no PLL, no loop
filter, no tracking.
*/

/// Divide by the largest absolute value; an all-zero input stays all zero.
pub fn normalize_peak(samples: &mut [f64]) {
    let peak = samples.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()));
    if peak > 0.0 && peak.is_finite() {
        for x in samples.iter_mut() {
            *x /= peak;
        }
    }
}

fn ensure_demodulable(signal: &Signal) -> Result<()> {
    if signal.is_empty() {
        return Err(FmError::invalid("signal", 0.0, "cannot demodulate an empty signal"));
    }
    if !(signal.sample_rate.is_finite() && signal.sample_rate > 0.0) {
        return Err(FmError::invalid(
            "sample_rate",
            signal.sample_rate,
            "must be positive and finite",
        ));
    }
    Ok(())
}

/// Recover the normalized message from a (possibly noisy) FM signal.
pub fn demodulate_fm(signal: &Signal, fc: f64) -> Result<Signal> {
    ensure_demodulable(signal)?;
    let fs = signal.sample_rate;
    let n = signal.len();

    if n < 2 {
        // no phase difference to take
        return Ok(Signal::new(vec![0.0; n], fs));
    }

    let analytic = analytic_signal(&signal.samples);
    let wrapped: Vec<f64> = analytic.iter().map(|z| z.arg()).collect();
    let phase = unwrap_phase(&wrapped);

    let to_hz = fs / TAU;
    let mut recovered = Vec::with_capacity(n);
    let first = (phase[1] - phase[0]) * to_hz - fc;
    recovered.push(first);
    recovered.extend(phase.windows(2).map(|w| (w[1] - w[0]) * to_hz - fc));

    normalize_peak(&mut recovered);
    debug!(samples = n, fc, "fm demodulated");

    Ok(Signal::new(recovered, fs))
}

/// Recover the normalized message from a (possibly noisy) AM signal.
///
/// `_fc` is accepted so both demodulators share a call shape; envelope
/// detection does not need the carrier frequency.
pub fn demodulate_am(signal: &Signal, _fc: f64) -> Result<Signal> {
    ensure_demodulable(signal)?;

    let envelope = Signal::new(
        analytic_signal(&signal.samples)
            .iter()
            .map(|z| z.norm())
            .collect(),
        signal.sample_rate,
    );
    let mean = envelope.mean();

    let mut recovered: Vec<f64> = envelope.samples.iter().map(|e| e - mean).collect();
    normalize_peak(&mut recovered);
    debug!(samples = signal.len(), envelope_mean = mean, "am demodulated");

    Ok(Signal::new(recovered, signal.sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::metrics::mean_squared_error;
    use crate::dsp::am::{synthesize_am, DEFAULT_AM_INDEX};
    use crate::dsp::fm::synthesize_fm;
    use crate::dsp::waveform::{generate, WaveformKind};
    use crate::signal::TimeBase;

    #[test]
    fn test_normalize_peak() {
        let mut v = vec![0.5, -2.0, 1.0];
        normalize_peak(&mut v);
        assert_eq!(v, vec![0.25, -1.0, 0.5]);

        let mut zeros = vec![0.0; 4];
        normalize_peak(&mut zeros);
        assert_eq!(zeros, vec![0.0; 4]);
    }

    #[test]
    fn test_fm_round_trip_small() {
        // whole message and carrier periods so the circular FFT sees no seam
        let t = TimeBase::new(1_000_000.0, 0.004).unwrap();
        let m = generate(&t, 1_000.0, WaveformKind::Sine).unwrap();
        let fm = synthesize_fm(&t, 100_000.0, 5_000.0, &m).unwrap();
        let recovered = demodulate_fm(&fm.signal, 100_000.0).unwrap();
        assert_eq!(recovered.len(), m.len());
        let mse = mean_squared_error(&m, &recovered.samples).unwrap();
        assert!(mse < 0.01, "mse {mse}");
    }

    #[test]
    fn test_am_round_trip() {
        let t = TimeBase::new(1_000_000.0, 0.004).unwrap();
        let m = generate(&t, 1_000.0, WaveformKind::Sine).unwrap();
        let am = synthesize_am(&t, 100_000.0, &m, DEFAULT_AM_INDEX).unwrap();
        let recovered = demodulate_am(&am, 100_000.0).unwrap();
        let mse = mean_squared_error(&m, &recovered.samples).unwrap();
        assert!(mse < 0.01, "mse {mse}");
    }

    #[test]
    fn test_constant_envelope_stays_finite() {
        // only rounding residue is left after removing the mean
        let t = TimeBase::new(100_000.0, 0.01).unwrap();
        let c = t.map(|x| (TAU * 10_000.0 * x).cos());
        let am = demodulate_am(&c, 10_000.0).unwrap();
        assert!(am.samples.iter().all(|v| v.is_finite()));
        assert!(am.peak() <= 1.0);
    }

    #[test]
    fn test_short_and_empty_signals() {
        let one = Signal::new(vec![0.3], 1_000.0);
        assert_eq!(demodulate_fm(&one, 100.0).unwrap().samples, vec![0.0]);
        let empty = Signal::new(Vec::new(), 1_000.0);
        assert!(demodulate_fm(&empty, 100.0).is_err());
        assert!(demodulate_am(&empty, 100.0).is_err());
    }

    #[test]
    fn test_first_sample_repeats_first_difference() {
        let t = TimeBase::new(1_000_000.0, 0.002).unwrap();
        let m = generate(&t, 1_000.0, WaveformKind::Sine).unwrap();
        let fm = synthesize_fm(&t, 100_000.0, 5_000.0, &m).unwrap();
        let recovered = demodulate_fm(&fm.signal, 100_000.0).unwrap();
        assert_eq!(recovered.samples[0], recovered.samples[1]);
    }
}
