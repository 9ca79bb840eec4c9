//! Plain-data representations for exchange with C-style math libraries.
//!
//! The raw vector structs have named fields in the same order as the
//! components of the corresponding aggregates and no padding, so vectors
//! convert in either direction by reinterpreting the bytes. The raw matrix
//! declares its cells row by row and is converted by reordering them.
//! Conversions are explicit.

use crate::{
    matrix::Matrix4,
    vector::{Vector2, Vector3, Vector4},
};
use bytemuck::{Pod, Zeroable};

/// A 2-component vector as a plain struct.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct RawVector2 {
    pub x: f32,
    pub y: f32,
}

/// A 3-component vector as a plain struct.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct RawVector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A 4-component vector as a plain struct.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct RawVector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// A 4x4 matrix as a plain struct with named cells.
///
/// The fields are declared row by row (`m0, m4, m8, m12, m1, ...`), the order
/// C-style math libraries use for their matrix struct, while the cell names
/// keep their column-major meaning: `mI` is element `I` of
/// [`Matrix4::to_cells`], so `m12`, `m13` and `m14` hold the translation of
/// an affine transform. Converting to and from [`Matrix4`] therefore
/// reorders the cells and cannot be done by reinterpretation.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct RawMatrix {
    pub m0: f32,
    pub m4: f32,
    pub m8: f32,
    pub m12: f32,
    pub m1: f32,
    pub m5: f32,
    pub m9: f32,
    pub m13: f32,
    pub m2: f32,
    pub m6: f32,
    pub m10: f32,
    pub m14: f32,
    pub m3: f32,
    pub m7: f32,
    pub m11: f32,
    pub m15: f32,
}

macro_rules! impl_raw_conversions {
    ($t:ty, $raw:ty) => {
        impl From<$raw> for $t {
            #[inline]
            fn from(raw: $raw) -> Self {
                bytemuck::cast(raw)
            }
        }

        impl From<$t> for $raw {
            #[inline]
            fn from(value: $t) -> Self {
                bytemuck::cast(value)
            }
        }
    };
}

impl_raw_conversions!(Vector2, RawVector2);
impl_raw_conversions!(Vector3, RawVector3);
impl_raw_conversions!(Vector4, RawVector4);
impl Matrix4 {
    /// Creates a matrix from its plain-data representation.
    #[inline]
    pub fn from_raw(raw: &RawMatrix) -> Self {
        Self::from_cells([
            raw.m0, raw.m1, raw.m2, raw.m3, //
            raw.m4, raw.m5, raw.m6, raw.m7, //
            raw.m8, raw.m9, raw.m10, raw.m11, //
            raw.m12, raw.m13, raw.m14, raw.m15, //
        ])
    }

    /// Converts the matrix to its plain-data representation.
    #[inline]
    pub fn to_raw(&self) -> RawMatrix {
        let [
            m0, m1, m2, m3, //
            m4, m5, m6, m7, //
            m8, m9, m10, m11, //
            m12, m13, m14, m15, //
        ] = self.to_cells();

        RawMatrix {
            m0,
            m4,
            m8,
            m12,
            m1,
            m5,
            m9,
            m13,
            m2,
            m6,
            m10,
            m14,
            m3,
            m7,
            m11,
            m15,
        }
    }
}

impl From<RawMatrix> for Matrix4 {
    #[inline]
    fn from(raw: RawMatrix) -> Self {
        Self::from_raw(&raw)
    }
}

impl From<Matrix4> for RawMatrix {
    #[inline]
    fn from(matrix: Matrix4) -> Self {
        matrix.to_raw()
    }
}
