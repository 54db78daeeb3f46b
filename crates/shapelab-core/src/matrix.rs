//! 3x3 affine transform matrix in column-major order.
//!
//! The matrix transforms homogeneous 2D points `(x, y, 1)`. Storage is a
//! flat `[a,b,c, d,e,f, g,h,i]` where `[a,b,c]` is the first column, so
//! the translation components live at indices 6 and 7.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// A 3x3 matrix of `f64` scalars, column-major. Always fully defined;
/// there is no partial or lazy state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat3 {
    m: [f64; 9],
}

impl Mat3 {
    /// The identity matrix.
    pub const IDENTITY: Mat3 = Mat3 {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Builds a matrix from 9 scalars in column-major order.
    pub fn from_columns(m: [f64; 9]) -> Self {
        Self { m }
    }

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// A translation by `(tx, ty)`; applying it to `(x, y, 1)` adds the
    /// offsets and leaves the homogeneous coordinate at 1.
    pub fn translation(tx: f64, ty: f64) -> Self {
        let mut out = Self::IDENTITY;
        out.m[6] = tx;
        out.m[7] = ty;
        out
    }

    /// A scale by `(sx, sy)`; z scale stays fixed at 1.
    pub fn scale(sx: f64, sy: f64) -> Self {
        let mut out = Self::IDENTITY;
        out.m[0] = sx;
        out.m[4] = sy;
        out
    }

    /// A counterclockwise rotation about the origin.
    ///
    /// The angle is in RADIANS. The parameter model stores angles in
    /// degrees, so callers convert with `to_radians()` before reaching
    /// this constructor.
    pub fn rotation(angle_radians: f64) -> Self {
        let (sin, cos) = angle_radians.sin_cos();
        let mut out = Self::IDENTITY;
        out.m[0] = cos;
        out.m[1] = sin;
        out.m[3] = -sin;
        out.m[4] = cos;
        out
    }

    /// Full column-major matrix product `self × other`. When the result
    /// transforms a column vector, `other` applies first.
    pub fn multiply(&self, other: &Mat3) -> Mat3 {
        let a = &self.m;
        let b = &other.m;
        let mut m = [0.0; 9];
        for col in 0..3 {
            for row in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += a[k * 3 + row] * b[col * 3 + k];
                }
                m[col * 3 + row] = sum;
            }
        }
        Mat3 { m }
    }

    /// Transforms `p` as the homogeneous point `(x, y, 1)`, producing a
    /// new point and leaving `p` untouched. The result carries `z = 1`
    /// (the homogeneous coordinate, not geometric depth) because the
    /// vertex-buffer layout downstream expects a z component.
    pub fn transform_point(&self, p: &Point) -> Point {
        let m = &self.m;
        Point::with_z(
            m[0] * p.x + m[3] * p.y + m[6],
            m[1] * p.x + m[4] * p.y + m[7],
            1.0,
        )
    }

    /// The scalar at `(col, row)`.
    pub fn get(&self, col: usize, row: usize) -> f64 {
        self.m[col * 3 + row]
    }

    /// The raw scalars in column-major order.
    pub fn as_slice(&self) -> &[f64; 9] {
        &self.m
    }

    /// Cell-wise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: &Mat3, eps: f64) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        self.multiply(&rhs)
    }
}
