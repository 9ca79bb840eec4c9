//! Vectors.
//!
//! The vector types here carry just enough arithmetic for building and
//! applying matrices. Each one is a `#[repr(transparent)]` wrapper around a
//! `[f32; N]`, so it has the same size, component order and lack of padding
//! as the plain `{x, y[, z][, w]}` structs of C-style math APIs.

use crate::swizzle::Aggregate;
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 2-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    components: [f32; 2],
}

/// A 3-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    components: [f32; 3],
}

/// A 4-dimensional vector.
///
/// Unlike `glam::Vec4` this type is only 4-byte aligned, matching the plain
/// four-float struct it stands in for.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    components: [f32; 4],
}

/// Implements what all the vector types share: the [`Aggregate`] storage
/// trait, indexing, element-wise arithmetic, approximate comparison and the
/// inner product.
macro_rules! impl_vector_common {
    ($t:ident, $n:literal) => {
        impl $t {
            /// Creates a new vector with all zeros.
            #[inline]
            pub const fn zeros() -> Self {
                Self::from_array([0.0; $n])
            }

            /// Creates a new vector with the same value for all components.
            #[inline]
            pub const fn same(value: f32) -> Self {
                Self::from_array([value; $n])
            }

            /// Creates a vector from an array of components.
            #[inline]
            pub const fn from_array(components: [f32; $n]) -> Self {
                Self { components }
            }

            /// Returns the components as an array.
            #[inline]
            pub const fn to_array(self) -> [f32; $n] {
                self.components
            }

            /// Computes the dot product of this vector with another.
            #[inline]
            pub fn dot(&self, other: &Self) -> f32 {
                self.components
                    .iter()
                    .zip(&other.components)
                    .map(|(a, b)| a * b)
                    .sum()
            }

            /// Computes the square of the norm of the vector.
            #[inline]
            pub fn norm_squared(&self) -> f32 {
                self.dot(self)
            }

            /// Computes the norm (length) of the vector.
            #[inline]
            pub fn norm(&self) -> f32 {
                self.norm_squared().sqrt()
            }

            /// Computes the normalized version of the vector. The result is
            /// non-finite if the vector has zero length.
            #[inline]
            pub fn normalized(&self) -> Self {
                self / self.norm()
            }

            /// Whether all components are finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.components.iter().all(|c| c.is_finite())
            }

            #[inline]
            fn zip_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
                Self::from_array(::std::array::from_fn(|i| {
                    f(self.components[i], other.components[i])
                }))
            }

            #[inline]
            fn map(&self, f: impl Fn(f32) -> f32) -> Self {
                Self::from_array(self.components.map(f))
            }
        }

        impl Aggregate<$n> for $t {
            #[inline]
            fn from_array(components: [f32; $n]) -> Self {
                Self { components }
            }

            #[inline]
            fn as_array(&self) -> &[f32; $n] {
                &self.components
            }

            #[inline]
            fn as_array_mut(&mut self) -> &mut [f32; $n] {
                &mut self.components
            }
        }

        impl From<[f32; $n]> for $t {
            #[inline]
            fn from(components: [f32; $n]) -> Self {
                Self::from_array(components)
            }
        }

        impl From<$t> for [f32; $n] {
            #[inline]
            fn from(vector: $t) -> Self {
                vector.to_array()
            }
        }

        impl Index<usize> for $t {
            type Output = f32;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                &self.components[index]
            }
        }

        impl IndexMut<usize> for $t {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.components[index]
            }
        }

        impl_binop!(Add, add, $t, $t, $t, |a, b| { a.zip_with(b, |a, b| a + b) });

        impl_binop!(Sub, sub, $t, $t, $t, |a, b| { a.zip_with(b, |a, b| a - b) });

        impl_binop!(Mul, mul, $t, f32, $t, |a, b| {
            let b = *b;
            a.map(|a| a * b)
        });

        impl_binop!(Mul, mul, f32, $t, $t, |a, b| { b * *a });

        impl_binop!(Div, div, $t, f32, $t, |a, b| { a * b.recip() });

        impl_binop_assign!(AddAssign, add_assign, $t, $t, |a, b| {
            *a = &*a + b;
        });

        impl_binop_assign!(SubAssign, sub_assign, $t, $t, |a, b| {
            *a = &*a - b;
        });

        impl_binop_assign!(MulAssign, mul_assign, $t, f32, |a, b| {
            *a = &*a * b;
        });

        impl_binop_assign!(DivAssign, div_assign, $t, f32, |a, b| {
            *a = &*a / b;
        });

        impl_unary_op!(Neg, neg, $t, $t, |val| { val.map(|c| -c) });

        impl_approx_eq_for_aggregate!($t, $n);
    };
}

impl_vector_common!(Vector2, 2);
impl_vector_common!(Vector3, 3);
impl_vector_common!(Vector4, 4);

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self::from_array([x, y])
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.components[1]
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.components[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.components[1]
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x(), self.y(), z)
    }
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_array([x, y, z])
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.components[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.components[2]
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.components[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.components[1]
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.components[2]
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f32) -> Vector4 {
        Vector4::new(self.x(), self.y(), self.z(), w)
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_array([x, y, z, w])
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.components[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.components[2]
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.components[3]
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.components[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.components[1]
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.components[2]
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut f32 {
        &mut self.components[3]
    }
}

impl_swizzles!(
    Vector2[2],
    Vector2 => {
        xx => [0, 0],
        yy => [1, 1],
        xy => [0, 1],
        yx => [1, 0],
    },
);

impl_swizzles!(
    Vector3[3],
    Vector2 => {
        xx => [0, 0],
        yy => [1, 1],
        xy => [0, 1],
        yx => [1, 0],
    },
    Vector3 => {
        xxx => [0, 0, 0],
        xxy => [0, 0, 1],
        xxz => [0, 0, 2],
        xyx => [0, 1, 0],
        xyy => [0, 1, 1],
        xyz => [0, 1, 2],
        xzx => [0, 2, 0],
        xzy => [0, 2, 1],
        xzz => [0, 2, 2],
        yxx => [1, 0, 0],
        yxy => [1, 0, 1],
        yxz => [1, 0, 2],
        yyx => [1, 1, 0],
        yyy => [1, 1, 1],
        yyz => [1, 1, 2],
        yzx => [1, 2, 0],
        yzy => [1, 2, 1],
        yzz => [1, 2, 2],
        zxx => [2, 0, 0],
        zxy => [2, 0, 1],
        zxz => [2, 0, 2],
        zyx => [2, 1, 0],
        zyy => [2, 1, 1],
        zyz => [2, 1, 2],
        zzx => [2, 2, 0],
        zzy => [2, 2, 1],
        zzz => [2, 2, 2],
    },
);

// Four components have 256 three- and four-letter arrangements, so only the
// common ones get names. Anything else goes through `Aggregate::permuted`.
impl_swizzles!(
    Vector4[4],
    Vector2 => {
        xy => [0, 1],
        zw => [2, 3],
    },
    Vector3 => {
        xyz => [0, 1, 2],
    },
    Vector4 => {
        wzyx => [3, 2, 1, 0],
    },
);

impl From<glam::Vec2> for Vector2 {
    #[inline]
    fn from(vector: glam::Vec2) -> Self {
        Self::from_array(vector.to_array())
    }
}

impl From<Vector2> for glam::Vec2 {
    #[inline]
    fn from(vector: Vector2) -> Self {
        Self::from_array(vector.to_array())
    }
}

impl From<glam::Vec3> for Vector3 {
    #[inline]
    fn from(vector: glam::Vec3) -> Self {
        Self::from_array(vector.to_array())
    }
}

impl From<Vector3> for glam::Vec3 {
    #[inline]
    fn from(vector: Vector3) -> Self {
        Self::from_array(vector.to_array())
    }
}

impl From<glam::Vec4> for Vector4 {
    #[inline]
    fn from(vector: glam::Vec4) -> Self {
        Self::from_array(vector.to_array())
    }
}

impl From<Vector4> for glam::Vec4 {
    #[inline]
    fn from(vector: Vector4) -> Self {
        Self::from_array(vector.to_array())
    }
}

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.x())
            .field("y", &self.y())
            .finish()
    }
}

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .finish()
    }
}

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("w", &self.w())
            .finish()
    }
}
