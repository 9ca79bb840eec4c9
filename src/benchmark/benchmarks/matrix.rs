use crate::{
    matrix::Matrix4,
    vector::{Vector3, Vector4},
};
use raymath_profiling::benchmark::Benchmarker;
use std::hint::black_box;

pub fn mul_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    let b = create_other_matrix4();
    benchmarker.benchmark(&mut || black_box(a) * black_box(b));
}

pub fn mul_glam_mat4(benchmarker: impl Benchmarker) {
    let a = glam::Mat4::from(create_matrix4());
    let b = glam::Mat4::from(create_other_matrix4());
    benchmarker.benchmark(&mut || black_box(a) * black_box(b));
}

pub fn mul_matrix4_by_vector4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    let v = Vector4::new(1.0, -2.0, 3.0, 1.0);
    benchmarker.benchmark(&mut || black_box(a) * black_box(v));
}

pub fn transpose_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || black_box(a).transposed());
}

pub fn compute_matrix4_determinant(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || black_box(a).determinant());
}

pub fn invert_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || black_box(a).inverted());
}

pub fn checked_invert_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || black_box(a).checked_inverted());
}

pub fn invert_glam_mat4(benchmarker: impl Benchmarker) {
    let a = glam::Mat4::from(create_matrix4());
    benchmarker.benchmark(&mut || black_box(a).inverse());
}

pub fn build_rotation_xyz(benchmarker: impl Benchmarker) {
    let angles = Vector3::new(0.3, -1.1, 2.4);
    benchmarker.benchmark(&mut || Matrix4::rotation_xyz(black_box(&angles)));
}

pub fn build_rotation_about_axis(benchmarker: impl Benchmarker) {
    let axis = Vector3::new(1.0, 2.0, -0.5).normalized();
    benchmarker.benchmark(&mut || Matrix4::rotation_about_axis(black_box(&axis), black_box(0.7)));
}

pub fn build_perspective(benchmarker: impl Benchmarker) {
    benchmarker.benchmark(&mut || {
        Matrix4::perspective(
            black_box(1.2),
            black_box(16.0 / 9.0),
            black_box(0.1),
            black_box(1000.0),
        )
    });
}

pub fn build_look_at(benchmarker: impl Benchmarker) {
    let eye = Vector3::new(4.0, 3.0, 8.0);
    let target = Vector3::new(0.0, 1.0, 0.0);
    let up = Vector3::unit_y();
    benchmarker.benchmark(&mut || {
        Matrix4::look_at(black_box(&eye), black_box(&target), black_box(&up))
    });
}

pub fn compose_model_view_projection(benchmarker: impl Benchmarker) {
    let model = Matrix4::translation(1.0, 0.0, -2.0) * Matrix4::rotation_y(0.5);
    let view = Matrix4::look_at(
        &Vector3::new(4.0, 3.0, 8.0),
        &Vector3::zeros(),
        &Vector3::unit_y(),
    );
    let projection = Matrix4::perspective(1.2, 16.0 / 9.0, 0.1, 1000.0);
    benchmarker.benchmark(&mut || black_box(projection) * black_box(view) * black_box(model));
}

fn create_matrix4() -> Matrix4 {
    Matrix4::from_cells([
        2.0, 0.5, -1.0, 0.0, //
        1.0, 3.0, 0.0, 0.0, //
        0.0, -2.0, 4.0, 0.0, //
        5.0, 1.0, -3.0, 1.0, //
    ])
}

fn create_other_matrix4() -> Matrix4 {
    Matrix4::rotation_about_axis(&Vector3::new(0.0, 0.6, 0.8), 1.1) * Matrix4::scaling(2.0, 1.0, 0.5)
}
