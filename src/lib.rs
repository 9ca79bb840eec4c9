//! Column-major 4x4 matrices and swizzling vector aggregates over plain
//! `f32` storage.
//!
//! Every value is a single fixed-size float array. Indexing, named fields
//! and swizzles are all views of that array. The plain structs in [`raw`]
//! carry values across into C-style math code: vectors by reinterpretation,
//! matrices by reordering their cells into the row-by-row field order.

#[macro_use]
mod macros;

#[cfg(feature = "benchmark")]
pub mod benchmark;
pub mod matrix;
pub mod raw;
pub mod swizzle;
pub mod transform;
pub mod vector;

pub use matrix::Matrix4;
pub use raw::{RawMatrix, RawVector2, RawVector3, RawVector4};
pub use swizzle::Aggregate;
pub use vector::{Vector2, Vector3, Vector4};
