//! Benchmarking utilities.
//!
//! Benchmark targets are written once against the [`Benchmarker`] trait and
//! can then be run for a fixed time by [`run`](benchmark::run), which is what
//! the `raymath` binary uses under external profilers, or measured by
//! `criterion`.

pub mod benchmark;

pub use benchmark::{Benchmarker, RunReport, RunSettings};
