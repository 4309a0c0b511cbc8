//! Benchmarks for single processing stages.

mod demod;
mod spectrum;
mod synthesis;

pub use demod::bench_demod;
pub use spectrum::bench_spectrum;
pub use synthesis::bench_synthesis;

use fm_lab::{generate, synthesize_fm, Signal, TimeBase, WaveformKind};

use crate::SAMPLE_RATE;

/// Time base holding exactly `len` samples
pub fn time_base(len: usize) -> TimeBase {
    TimeBase::new(SAMPLE_RATE, len as f64 / SAMPLE_RATE).expect("valid bench time base")
}

/// A β = 5 FM signal: fc 1 MHz, fm 1 kHz, kf 5 kHz/V
pub fn fm_signal(times: &TimeBase) -> Signal {
    let message = generate(times, 1_000.0, WaveformKind::Sine).expect("valid message");
    synthesize_fm(times, 1_000_000.0, 5_000.0, &message)
        .expect("valid fm")
        .signal
}
