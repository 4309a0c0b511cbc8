//! Real-world scenario benchmarks.
//!
//! Whole analysis passes as the terminal front-end runs them.

mod pipeline;

pub use pipeline::bench_pipeline;
