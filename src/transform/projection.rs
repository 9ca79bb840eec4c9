//! Projections.
//!
//! The builders take `f64` arguments and compute in double precision before
//! rounding the cells to `f32`, which keeps distant far planes accurate.
//! They follow the OpenGL convention: the camera looks down its negative
//! z-axis, and the view volume maps onto the cube `[-1, 1]^3` in normalized
//! device coordinates.

use crate::matrix::Matrix4;

impl Matrix4 {
    /// Creates a perspective projection for the off-center view frustum with
    /// the given extents on the near plane and the given near and far
    /// distances.
    pub fn frustum(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;

        Self::from_cells([
            (2.0 * near / width) as f32,
            0.0,
            0.0,
            0.0,
            0.0,
            (2.0 * near / height) as f32,
            0.0,
            0.0,
            ((right + left) / width) as f32,
            ((top + bottom) / height) as f32,
            (-(far + near) / depth) as f32,
            -1.0,
            0.0,
            0.0,
            (-2.0 * far * near / depth) as f32,
            0.0,
        ])
    }

    /// Creates a symmetric perspective projection with the given vertical
    /// field of view (in radians), width-to-height aspect ratio and near and
    /// far distances. The extents of the near plane are derived from the
    /// field of view and aspect ratio and passed on to [`Self::frustum`].
    pub fn perspective(vertical_field_of_view: f64, aspect_ratio: f64, near: f64, far: f64) -> Self {
        let top = near * (0.5 * vertical_field_of_view).tan();
        let right = top * aspect_ratio;
        Self::frustum(-right, right, -top, top, near, far)
    }

    /// Creates an orthographic projection for the box with the given extents
    /// and near and far distances.
    pub fn orthographic(
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;

        Self::from_cells([
            (2.0 / width) as f32,
            0.0,
            0.0,
            0.0,
            0.0,
            (2.0 / height) as f32,
            0.0,
            0.0,
            0.0,
            0.0,
            (-2.0 / depth) as f32,
            0.0,
            (-(left + right) / width) as f32,
            (-(top + bottom) / height) as f32,
            (-(far + near) / depth) as f32,
            1.0,
        ])
    }
}
