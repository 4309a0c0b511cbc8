//! Benchmarks for complete analysis passes.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fm_lab::{Analysis, ModulationConfig, SpectrumAnalyzer, WaveformKind};

pub fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/pipeline");
    group.sample_size(20);

    for kind in WaveformKind::ALL {
        let config = ModulationConfig::default().with_waveform(kind);

        // Default settings, fresh planner each pass
        group.bench_with_input(BenchmarkId::new("cold", kind.name()), &config, |b, config| {
            b.iter(|| Analysis::run(black_box(config)))
        });

        // Planner kept across passes, as fmscope does
        let mut analyzer = SpectrumAnalyzer::new();
        group.bench_with_input(BenchmarkId::new("warm", kind.name()), &config, |b, config| {
            b.iter(|| Analysis::run_with(black_box(config), &mut analyzer))
        });
    }

    group.finish();
}
