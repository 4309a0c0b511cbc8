//! Benchmarks for the FFT spectrum.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fm_lab::{compute_spectrum, SpectrumAnalyzer};

use super::{fm_signal, time_base};
use crate::SIGNAL_LENGTHS;

pub fn bench_spectrum(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/spectrum");

    for &len in SIGNAL_LENGTHS {
        let signal = fm_signal(&time_base(len));

        // One-shot - plans the FFT every call
        group.bench_with_input(BenchmarkId::new("one_shot", len), &len, |b, _| {
            b.iter(|| compute_spectrum(black_box(&signal), Some(1_024_000.0)))
        });

        // Cached plan - what a re-running front-end pays
        let mut analyzer = SpectrumAnalyzer::new();
        group.bench_with_input(BenchmarkId::new("cached_plan", len), &len, |b, _| {
            b.iter(|| analyzer.analyze(black_box(&signal), Some(1_024_000.0)))
        });
    }

    group.finish();
}
