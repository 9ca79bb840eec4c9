//! Logging macros.

/// Evaluates the given expression and logs at the `info` level how long the
/// evaluation took.
///
/// The message and its arguments follow the usual formatting syntax and are
/// separated from the expression by a semicolon:
///
/// ```ignore
/// let product = with_timing_info_logging!("Multiplying {} matrices", n; {
///     multiply_all(&matrices)
/// });
/// ```
#[macro_export]
macro_rules! with_timing_info_logging {
    ($message:expr $(,$arg:expr)*; $expression:expr) => {{
        let _start_time = ::std::time::Instant::now();
        let _result = $expression;
        let _elapsed = _start_time.elapsed();
        $crate::info!(
            concat!($message, " took {:.3} ms")$(,$arg)*,
            _elapsed.as_secs_f64() * 1e3,
        );
        _result
    }};
}
