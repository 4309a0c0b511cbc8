//! Benchmarks for FM synthesis, analysis and full analysis passes.
//!
//! Run with: cargo bench
//!
//! An interactive front-end re-runs a whole pass on every parameter change,
//! so these numbers decide how responsive a slider feels. A pass over the
//! default 50 000 samples should stay well under 100 ms.
//!
//! Benchmark groups:
//!   - dsp/*        Single stages (synthesis, spectrum, demodulation)
//!   - scenarios/*  Complete analysis passes

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Buffer lengths covering short previews up to the default 5 ms at 10 MHz.
pub const SIGNAL_LENGTHS: &[usize] = &[4_096, 16_384, 50_000];

/// Sample rate every bench buffer is generated at
pub const SAMPLE_RATE: f64 = 10_000_000.0;

criterion_group!(
    benches,
    // Single stages
    dsp::bench_synthesis,
    dsp::bench_spectrum,
    dsp::bench_demod,
    // Complete passes
    scenarios::bench_pipeline,
);
criterion_main!(benches);
