//! Translation and scaling.

use crate::{matrix::Matrix4, vector::Vector3};

impl Matrix4 {
    /// Creates a matrix translating points by the given displacement. The
    /// displacement is placed in the last column (`m12`, `m13`, `m14`).
    #[inline]
    pub const fn translation(x: f32, y: f32, z: f32) -> Self {
        Self::from_cells([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            x, y, z, 1.0, //
        ])
    }

    /// Creates a matrix translating points by the given displacement vector.
    #[inline]
    pub const fn from_translation(translation: &Vector3) -> Self {
        Self::translation(translation.x(), translation.y(), translation.z())
    }

    /// Creates a matrix scaling by the given factor along each axis.
    #[inline]
    pub const fn scaling(x: f32, y: f32, z: f32) -> Self {
        Self::from_cells([
            x, 0.0, 0.0, 0.0, //
            0.0, y, 0.0, 0.0, //
            0.0, 0.0, z, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ])
    }

    /// Creates a matrix scaling by the components of the given vector.
    #[inline]
    pub const fn from_scaling(scaling: &Vector3) -> Self {
        Self::scaling(scaling.x(), scaling.y(), scaling.z())
    }
}
