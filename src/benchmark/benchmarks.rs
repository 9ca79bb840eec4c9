pub mod matrix;
pub mod swizzle;
