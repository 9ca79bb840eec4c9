//! Logging facade for `raymath` tooling.
//!
//! The math library itself never logs. Only the benchmark runner and the
//! command line binary go through this crate.

#[macro_use]
mod macros;

pub use log::*;
