use raymath::benchmark::benchmarks::matrix;
use raymath_profiling::{benchmark::criterion, define_criterion_group};

define_criterion_group!(products, matrix => [
    mul_matrix4,
    mul_glam_mat4,
    mul_matrix4_by_vector4,
    compose_model_view_projection,
]);

define_criterion_group!(algebra, matrix => [
    transpose_matrix4,
    compute_matrix4_determinant,
    invert_matrix4,
    checked_invert_matrix4,
    invert_glam_mat4,
]);

define_criterion_group!(builders, matrix => [
    build_rotation_xyz,
    build_rotation_about_axis,
    build_perspective,
    build_look_at,
]);

criterion::criterion_group!(
    name = benches;
    config = criterion::config();
    targets = products, algebra, builders
);
criterion::criterion_main!(benches);
