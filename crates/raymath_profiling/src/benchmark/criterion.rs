//! Benchmarking using `criterion`.

pub use criterion::{Criterion, criterion_group, criterion_main};

use crate::benchmark::Benchmarker;
use criterion::{BenchmarkGroup, measurement::WallTime};
use std::time::Duration;

/// Defines a function `$name(&mut Criterion)` that measures the listed
/// functions of the benchmark module `$module` inside one criterion benchmark
/// group named `$module_$name`.
#[macro_export]
macro_rules! define_criterion_group {
    ($name:ident, $module:ident => [$($func:ident),+ $(,)?]) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            let mut group = c.benchmark_group(concat!(stringify!($module), "_", stringify!($name)));
            $(
                $module::$func($crate::benchmark::criterion::GroupBenchmarker::new(
                    &mut group,
                    stringify!($func),
                ));
            )+
            group.finish();
        }
    };
}

/// Measures one function as a member of a criterion benchmark group.
#[allow(missing_debug_implementations)]
pub struct GroupBenchmarker<'g, 'c> {
    group: &'g mut BenchmarkGroup<'c, WallTime>,
    id: &'static str,
}

impl<'g, 'c> GroupBenchmarker<'g, 'c> {
    pub fn new(group: &'g mut BenchmarkGroup<'c, WallTime>, id: &'static str) -> Self {
        Self { group, id }
    }
}

impl Benchmarker for GroupBenchmarker<'_, '_> {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        self.group.bench_function(self.id, |b| b.iter(&mut *f));
    }
}

/// The criterion configuration for the nanosecond-scale math targets: short
/// warm-up and measurement windows with many samples.
pub fn config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
        .sample_size(200)
}
