//! Benchmarks for message generation and FM/AM synthesis.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fm_lab::{generate, synthesize_am, synthesize_fm, WaveformKind, DEFAULT_AM_INDEX};

use super::time_base;
use crate::SIGNAL_LENGTHS;

pub fn bench_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/synthesis");

    for &len in SIGNAL_LENGTHS {
        let times = time_base(len);

        // Waveforms - one transcendental or floor per sample
        for kind in WaveformKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), len), &len, |b, _| {
                b.iter(|| generate(black_box(&times), black_box(1_000.0), kind))
            });
        }

        let message = generate(&times, 1_000.0, WaveformKind::Sine).expect("valid message");

        // FM - running sum plus cos per sample
        group.bench_with_input(BenchmarkId::new("fm", len), &len, |b, _| {
            b.iter(|| synthesize_fm(black_box(&times), 1_000_000.0, 5_000.0, black_box(&message)))
        });

        // AM - reference path, no integration
        group.bench_with_input(BenchmarkId::new("am", len), &len, |b, _| {
            b.iter(|| {
                synthesize_am(
                    black_box(&times),
                    1_000_000.0,
                    black_box(&message),
                    DEFAULT_AM_INDEX,
                )
            })
        });
    }

    group.finish();
}
