//! Builders for transformation matrices.
//!
//! All builders produce a [`Matrix4`](crate::matrix::Matrix4) acting on
//! column vectors in a right-handed coordinate system, with angles in radians.

mod affine;
mod projection;
mod rotation;
mod view;
