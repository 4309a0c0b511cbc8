//! Analytic signal by frequency-domain Hilbert transform, plus phase unwrapping.

use std::f64::consts::{PI, TAU};

use rustfft::{num_complex::Complex, FftPlanner};

/*
Analytic Signal
===============

A real signal x[n] has a Hermitian spectrum: X[-k] = conj(X[k]). Throwing away
the negative half and doubling the positive half leaves a one-sided spectrum
whose inverse is

    z[n] = x[n] + j·H{x}[n]

with H the Hilbert transform. |z| is the envelope and arg(z) the instantaneous
phase, which is everything the demodulators need.

Bin weights for an N-point FFT:

    bin                      N even          N odd
    ---------------------    -------------   -------------
    k = 0        (DC)        1               1
    1 ≤ k < N/2  (positive)  2               2  (k ≤ (N-1)/2)
    k = N/2      (Nyquist)   1               -
    k > N/2      (negative)  0               0

DC and Nyquist are their own mirror images, so they keep weight 1. Doubling
them would add a spurious imaginary offset; zeroing them would remove part of
the real signal. With these weights Re{z} reproduces x to rounding error.

The FFT is circular, so a buffer that does not hold an integer number of
periods shows edge artefacts in the first and last few samples.
*/

/// Complex analytic signal of `x`; the real part equals `x`.
pub fn analytic_signal(x: &[f64]) -> Vec<Complex<f64>> {
    let n = x.len();
    if n == 0 {
        return Vec::new();
    }

    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(n);
    let inverse = planner.plan_fft_inverse(n);

    let mut spectrum: Vec<Complex<f64>> = x.iter().map(|&v| Complex::new(v, 0.0)).collect();
    forward.process(&mut spectrum);

    for (k, bin) in spectrum.iter_mut().enumerate() {
        *bin *= hilbert_weight(k, n);
    }

    inverse.process(&mut spectrum);

    // rustfft leaves the inverse unnormalized
    let scale = 1.0 / n as f64;
    for v in spectrum.iter_mut() {
        *v *= scale;
    }
    spectrum
}

/// Weight applied to bin `k` of an `n`-point spectrum.
#[inline]
fn hilbert_weight(k: usize, n: usize) -> f64 {
    if k == 0 || (n % 2 == 0 && k == n / 2) {
        1.0
    } else if k <= (n - 1) / 2 {
        2.0
    } else {
        0.0
    }
}

/// Remove 2π jumps so consecutive differences fall in (-π, π].
pub fn unwrap_phase(phases: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(phases.len());
    let Some(&first) = phases.first() else {
        return out;
    };
    out.push(first);

    let mut offset = 0.0;
    for pair in phases.windows(2) {
        let raw = pair[1] - pair[0];
        let mut wrapped = raw - TAU * ((raw + PI) / TAU).floor();
        // floor maps +π to -π; keep the half-open interval (-π, π]
        if wrapped == -PI && raw > 0.0 {
            wrapped = PI;
        }
        offset += wrapped - raw;
        out.push(pair[1] + offset);
    }
    out
}
