//! Benchmark targets.

pub mod benchmarks;

pub use raymath_profiling::{RunReport, RunSettings};

raymath_profiling::define_target_enum! {
    Target,
    crate::benchmark::benchmarks,
    matrix => {
        mul_matrix4,
        mul_glam_mat4,
        mul_matrix4_by_vector4,
        transpose_matrix4,
        compute_matrix4_determinant,
        invert_matrix4,
        checked_invert_matrix4,
        invert_glam_mat4,
        build_rotation_xyz,
        build_rotation_about_axis,
        build_perspective,
        build_look_at,
        compose_model_view_projection,
    },
    swizzle => {
        read_vector3_zyx,
        write_vector3_xy,
        write_vector3_xxy,
        permute_vector4,
        set_permuted_vector4,
    },
}

/// Runs the given target for the configured duration, starting once the
/// configured delay has passed, and logs how fast the evaluations were.
pub fn benchmark(target: Target, settings: RunSettings) -> RunReport {
    let report = raymath_log::with_timing_info_logging!("Running benchmark target {:?}", target; {
        raymath_profiling::benchmark::run(|benchmarker| target.run_with(benchmarker), settings)
    });
    match report.mean_evaluation_time() {
        Some(mean) => raymath_log::info!(
            "Evaluated {:?} {} times ({:.1} ns per evaluation)",
            target,
            report.evaluations,
            mean.as_secs_f64() * 1e9,
        ),
        None => raymath_log::warn!("Benchmark target {:?} was never evaluated", target),
    }
    report
}
