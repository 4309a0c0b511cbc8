//! Additive white Gaussian noise calibrated to a target SNR.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::{debug, warn};

use crate::error::{FmError, Result};
use crate::signal::Signal;

/// Noise power that puts `signal_power` at `snr_db` above it.
///
/// SNR = 10·log10(Ps / Pn)  →  Pn = Ps / 10^(SNR/10)
#[inline]
pub fn noise_power_for_snr(signal_power: f64, snr_db: f64) -> f64 {
    signal_power / 10.0_f64.powf(snr_db / 10.0)
}

/// Add noise drawn from a generator seeded with `seed`.
///
/// Equal seeds give bit-identical output; there is no hidden global RNG.
pub fn add_noise_for_snr(signal: &Signal, snr_db: f64, seed: u64) -> Result<Signal> {
    let mut rng = StdRng::seed_from_u64(seed);
    add_noise_with_rng(signal, snr_db, &mut rng)
}

/// Add noise drawn from a caller-owned generator.
///
/// Measures the mean power of `signal`, derives the noise power for `snr_db`
/// and adds one independent N(0, σ²) draw per sample. A zero-power signal is
/// returned unchanged.
pub fn add_noise_with_rng<R: Rng + ?Sized>(
    signal: &Signal,
    snr_db: f64,
    rng: &mut R,
) -> Result<Signal> {
    if !snr_db.is_finite() {
        return Err(FmError::invalid("snr_db", snr_db, "must be finite"));
    }

    let signal_power = signal.power();
    if signal_power == 0.0 {
        warn!(len = signal.len(), "zero-power signal, no noise added");
        return Ok(signal.clone());
    }

    let noise_power = noise_power_for_snr(signal_power, snr_db);
    let normal = Normal::new(0.0, noise_power.sqrt()).map_err(|e| FmError::Noise(e.to_string()))?;

    debug!(signal_power, noise_power, snr_db, "adding white gaussian noise");

    let samples = signal
        .samples
        .iter()
        .map(|&x| x + normal.sample(rng))
        .collect();

    Ok(Signal::new(samples, signal.sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn tone(len: usize) -> Signal {
        let samples = (0..len).map(|i| (TAU * 0.01 * i as f64).cos()).collect();
        Signal::new(samples, 1_000.0)
    }

    fn noise_of(noisy: &Signal, clean: &Signal) -> Signal {
        let samples = noisy
            .samples
            .iter()
            .zip(&clean.samples)
            .map(|(a, b)| a - b)
            .collect();
        Signal::new(samples, clean.sample_rate)
    }

    #[test]
    fn test_same_seed_is_bit_identical() {
        let s = tone(4_096);
        let a = add_noise_for_snr(&s, 20.0, 42).unwrap();
        let b = add_noise_for_snr(&s, 20.0, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_same_power() {
        let s = tone(50_000);
        let a = add_noise_for_snr(&s, 20.0, 42).unwrap();
        let b = add_noise_for_snr(&s, 20.0, 7).unwrap();
        assert_ne!(a, b);

        let expected = s.power() / 100.0;
        for noisy in [&a, &b] {
            let measured = noise_of(noisy, &s).power();
            assert!(
                (measured - expected).abs() / expected < 0.05,
                "noise power {measured} vs {expected}"
            );
        }
    }

    #[test]
    fn test_zero_signal_unchanged() {
        let s = Signal::new(vec![0.0; 128], 1_000.0);
        let out = add_noise_for_snr(&s, 10.0, 1).unwrap();
        assert_eq!(out, s);
    }

    #[test]
    fn test_non_finite_snr_rejected() {
        let s = tone(16);
        assert!(add_noise_for_snr(&s, f64::NAN, 1).is_err());
        assert!(add_noise_for_snr(&s, f64::INFINITY, 1).is_err());
    }

    #[test]
    fn test_shared_generator_advances() {
        let s = tone(256);
        let mut rng = StdRng::seed_from_u64(3);
        let first = add_noise_with_rng(&s, 10.0, &mut rng).unwrap();
        let second = add_noise_with_rng(&s, 10.0, &mut rng).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_noise_power_formula() {
        assert_eq!(noise_power_for_snr(1.0, 0.0), 1.0);
        assert!((noise_power_for_snr(2.0, 10.0) - 0.2).abs() < 1e-12);
    }
}
