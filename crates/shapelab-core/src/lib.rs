//! # Shapelab Core
//!
//! Core value types for Shapelab: points, colors, and the 3x3 affine
//! matrix used by the designer's transform pipeline.
//!
//! Everything in this crate is a plain value computation. Matrices are
//! stored in column-major order and transform homogeneous 2D points
//! `(x, y, 1)`, which is what lets translation be expressed as a matrix
//! multiplication.

pub mod color;
pub mod error;
pub mod matrix;
pub mod point;

pub use color::Color;
pub use error::{Result, ValidationError};
pub use matrix::Mat3;
pub use point::Point;
