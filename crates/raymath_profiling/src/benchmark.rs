//! Running benchmark targets.

#[cfg(feature = "criterion")]
pub mod criterion;

use std::{
    hint::black_box,
    time::{Duration, Instant, TryFromFloatSecsError},
};

/// Something that can repeatedly evaluate a closure to measure it.
pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

/// How long to keep evaluating a target, and how long to wait before the
/// first evaluation so that a profiler can be attached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSettings {
    duration: Duration,
    delay: Duration,
}

/// What a timed run measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub evaluations: u64,
    pub elapsed: Duration,
}

/// Evaluates the closure in a loop until the configured duration has passed
/// and records the outcome in the report it borrows. The closure is always
/// evaluated at least once.
#[derive(Debug)]
pub struct TimedBenchmarker<'a> {
    settings: RunSettings,
    report: &'a mut RunReport,
}

impl RunSettings {
    /// Creates settings from a duration and delay in seconds.
    ///
    /// # Errors
    /// If either value is negative, NaN or too large for a [`Duration`].
    pub fn from_secs(duration: f64, delay: f64) -> Result<Self, TryFromFloatSecsError> {
        Ok(Self {
            duration: Duration::try_from_secs_f64(duration)?,
            delay: Duration::try_from_secs_f64(delay)?,
        })
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl RunReport {
    /// The average time one evaluation took, or [`None`] if nothing was
    /// evaluated.
    pub fn mean_evaluation_time(&self) -> Option<Duration> {
        let evaluations = u32::try_from(self.evaluations).unwrap_or(u32::MAX);
        (evaluations > 0).then(|| self.elapsed / evaluations)
    }
}

impl Benchmarker for TimedBenchmarker<'_> {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        std::thread::sleep(self.settings.delay);

        let start = Instant::now();
        let mut evaluations = 0;
        let elapsed = loop {
            black_box(f());
            evaluations += 1;

            let elapsed = start.elapsed();
            if elapsed >= self.settings.duration {
                break elapsed;
            }
        };

        *self.report = RunReport {
            evaluations,
            elapsed,
        };
    }
}

/// Defines an enum with one variant per benchmark function, together with a
/// `run_with` method that runs the function for a variant.
///
/// Functions are grouped by the module they live in under `$benchmarks_mod`,
/// and the variant name is the camel-cased concatenation of module and
/// function name (`matrix => { mul_matrix4 }` gives `MatrixMulMatrix4`).
/// With the `cli` feature of the calling crate enabled, the enum derives
/// `clap::ValueEnum`.
#[macro_export]
macro_rules! define_target_enum {
    (
        $name:ident,
        $benchmarks_mod:path,
        $(
            $module:ident => {
                $($func:ident),* $(,)?
            }
        ),* $(,)?
    ) => {
        ::pastey::paste! {
            #[allow(clippy::enum_variant_names)]
            #[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
            #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
            pub enum $name {
                $(
                    $( [<$module:camel $func:camel>] ),*
                ),*
            }

            impl $name {
                /// Runs the benchmark function for this target with the given
                /// benchmarker.
                pub fn run_with(self, benchmarker: impl $crate::benchmark::Benchmarker) {
                    match self {
                        $(
                            $( Self::[<$module:camel $func:camel>] => $benchmarks_mod::$module::$func(benchmarker), )*
                        )*
                    }
                }
            }
        }
    };
}

/// Hands a [`TimedBenchmarker`] with the given settings to `execute` and
/// returns what it measured.
pub fn run(execute: impl FnOnce(TimedBenchmarker<'_>), settings: RunSettings) -> RunReport {
    let mut report = RunReport::default();
    execute(TimedBenchmarker {
        settings,
        report: &mut report,
    });
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_run_evaluates_closure_at_least_once() {
        let mut count = 0;
        let report = run(
            |benchmarker| benchmarker.benchmark(&mut || count += 1),
            RunSettings::default(),
        );
        assert!(count >= 1);
        assert_eq!(report.evaluations, count);
    }

    #[test]
    fn timed_run_keeps_evaluating_for_requested_duration() {
        let settings = RunSettings::from_secs(0.01, 0.0).unwrap();
        let report = run(|benchmarker| benchmarker.benchmark(&mut || 1 + 1), settings);
        assert!(report.elapsed >= Duration::from_millis(10));
        assert!(report.mean_evaluation_time().is_some());
    }

    #[test]
    fn report_without_evaluations_has_no_mean_time() {
        assert!(RunReport::default().mean_evaluation_time().is_none());
    }

    #[test]
    fn run_settings_reject_negative_and_nan_seconds() {
        assert!(RunSettings::from_secs(-1.0, 0.0).is_err());
        assert!(RunSettings::from_secs(0.0, -0.5).is_err());
        assert!(RunSettings::from_secs(f64::NAN, 0.0).is_err());
        assert!(RunSettings::from_secs(1.0, f64::NAN).is_err());
        assert!(RunSettings::from_secs(f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn run_settings_keep_given_seconds() {
        let settings = RunSettings::from_secs(2.5, 0.25).unwrap();
        assert_eq!(settings.duration(), Duration::from_millis(2500));
        assert_eq!(settings.delay(), Duration::from_millis(250));
    }
}
