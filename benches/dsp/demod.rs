//! Benchmarks for channel noise and demodulation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fm_lab::{add_noise_for_snr, demodulate_am, demodulate_fm};

use super::{fm_signal, time_base};
use crate::SIGNAL_LENGTHS;

pub fn bench_demod(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/demod");

    for &len in SIGNAL_LENGTHS {
        let clean = fm_signal(&time_base(len));
        let noisy = add_noise_for_snr(&clean, 20.0, 42).expect("valid noise");

        // Gaussian draw per sample
        group.bench_with_input(BenchmarkId::new("awgn", len), &len, |b, _| {
            b.iter(|| add_noise_for_snr(black_box(&clean), 20.0, 42))
        });

        // Forward + inverse FFT, atan2, unwrap
        group.bench_with_input(BenchmarkId::new("fm", len), &len, |b, _| {
            b.iter(|| demodulate_fm(black_box(&noisy), 1_000_000.0))
        });

        // Forward + inverse FFT, magnitude
        group.bench_with_input(BenchmarkId::new("am", len), &len, |b, _| {
            b.iter(|| demodulate_am(black_box(&noisy), 1_000_000.0))
        });
    }

    group.finish();
}
