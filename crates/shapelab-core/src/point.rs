//! 2D/3D point value type.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Result};

/// A point in 2D or 3D space. Pure value type: two points with the same
/// coordinates are interchangeable.
///
/// The editor works in 2D, so `z` defaults to 0 and is mostly carried
/// along for the benefit of the vertex-buffer layout, which expects
/// x,y,z triples.
///
/// Fields are public for the core's own arithmetic; a direct write
/// skips validation, so values crossing the form boundary go through
/// [`Point::try_new`] (or the validated setters of the type holding
/// the point).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Point {
    /// The point (0, 0, 0).
    pub const ORIGIN: Point = Point {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a 2D point (z = 0). Coordinates produced by the core's own
    /// arithmetic are finite; values arriving from a form binding go
    /// through [`Point::try_new`] instead.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Creates a point with an explicit z coordinate.
    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a 2D point from untrusted input, rejecting NaN and
    /// infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        Ok(Self {
            x: ensure_finite("x", x)?,
            y: ensure_finite("y", y)?,
            z: 0.0,
        })
    }

    /// Euclidean distance to another point (2D, ignores z).
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when every coordinate is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}
