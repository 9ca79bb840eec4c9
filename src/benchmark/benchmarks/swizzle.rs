use crate::{
    swizzle::Aggregate,
    vector::{Vector2, Vector3, Vector4},
};
use raymath_profiling::benchmark::Benchmarker;
use std::hint::black_box;

pub fn read_vector3_zyx(benchmarker: impl Benchmarker) {
    let v = Vector3::new(1.0, 2.0, 3.0);
    benchmarker.benchmark(&mut || black_box(v).zyx());
}

pub fn write_vector3_xy(benchmarker: impl Benchmarker) {
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    let value = Vector2::new(9.0, 8.0);
    benchmarker.benchmark(&mut || {
        v.set_xy(black_box(value));
        v
    });
}

pub fn write_vector3_xxy(benchmarker: impl Benchmarker) {
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    let value = Vector3::new(7.0, 8.0, 9.0);
    benchmarker.benchmark(&mut || {
        v.set_xxy(black_box(value));
        v
    });
}

pub fn permute_vector4(benchmarker: impl Benchmarker) {
    let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
    benchmarker.benchmark(&mut || -> Vector4 { black_box(v).permuted(black_box([3, 1, 2, 0])) });
}

pub fn set_permuted_vector4(benchmarker: impl Benchmarker) {
    let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);
    let value = Vector3::new(7.0, 8.0, 9.0);
    benchmarker.benchmark(&mut || {
        v.set_permuted(black_box([3, 0, 3]), &black_box(value));
        v
    });
}
