//! Benchmark utilities for adaline-rs.
//!
//! - Seeded synthetic two-class data and z-score standardisation
//! - Timing helpers for the learning-rate sweep binary
//!
//! Criterion benchmarks live in `benches/`.

pub mod data;
pub mod utils;

pub use data::{Blobs, Standardizer};
pub use utils::{benchmark_with_warmup, time_fn, BenchmarkStats};
