//! Rotations.

use crate::{matrix::Matrix4, vector::Vector3};

impl Matrix4 {
    /// Creates a matrix rotating by the given angle about the x-axis. A
    /// positive angle rotates counter-clockwise when looking from the positive
    /// axis toward the origin.
    #[inline]
    pub fn rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_cells([
            1.0, 0.0, 0.0, 0.0, //
            0.0, cos, sin, 0.0, //
            0.0, -sin, cos, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ])
    }

    /// Creates a matrix rotating by the given angle about the y-axis.
    #[inline]
    pub fn rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_cells([
            cos, 0.0, -sin, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            sin, 0.0, cos, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ])
    }

    /// Creates a matrix rotating by the given angle about the z-axis.
    #[inline]
    pub fn rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_cells([
            cos, sin, 0.0, 0.0, //
            -sin, cos, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ])
    }

    /// Creates a matrix rotating by the given angle about the given axis,
    /// using Rodrigues' formula.
    ///
    /// The axis must have unit length. It is not normalized here, and a
    /// non-unit axis gives a matrix that is not a rotation.
    #[inline]
    pub fn rotation_about_axis(axis: &Vector3, angle: f32) -> Self {
        let [x, y, z] = axis.to_array();
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;

        Self::from_cells([
            x * x * t + c,
            y * x * t + z * s,
            z * x * t - y * s,
            0.0,
            x * y * t - z * s,
            y * y * t + c,
            z * y * t + x * s,
            0.0,
            x * z * t + y * s,
            y * z * t - x * s,
            z * z * t + c,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Creates the product `Rx(angles.x) * Ry(angles.y) * Rz(angles.z)` of
    /// elementary rotations. Applied to a vector, the rotation about z acts
    /// first.
    #[inline]
    pub fn rotation_xyz(angles: &Vector3) -> Self {
        Self::rotation_x(angles.x()) * Self::rotation_y(angles.y()) * Self::rotation_z(angles.z())
    }

    /// Creates the product `Rz(angles.z) * Ry(angles.y) * Rx(angles.x)` of
    /// elementary rotations. Applied to a vector, the rotation about x acts
    /// first.
    #[inline]
    pub fn rotation_zyx(angles: &Vector3) -> Self {
        Self::rotation_z(angles.z()) * Self::rotation_y(angles.y()) * Self::rotation_x(angles.x())
    }
}
