use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use shapelab_core::error::{ensure_finite, Result, ValidationError};
use shapelab_core::{Mat3, Point};

use super::DesignerShape;

fn default_slices() -> usize {
    DesignCircle::DEFAULT_SLICES
}

/// A circle with variable radius, rendered as a regular polygon
/// (triangle fan) of `slices` vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCircle {
    pub center: Point,
    radius: f64,
    #[serde(default = "default_slices")]
    slices: usize,
}

impl DesignCircle {
    /// Slice count used when none is requested. More slices render
    /// smoother at the cost of vertex count; the slice count never
    /// affects the centroid.
    pub const DEFAULT_SLICES: usize = 36;

    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ValidationError::InvalidDimension {
                name: "radius",
                value: radius,
            });
        }
        Ok(Self {
            center,
            radius,
            slices: Self::DEFAULT_SLICES,
        })
    }

    /// Overrides the slice count. Clamped to at least 3 (the smallest
    /// polygon that encloses any area).
    pub fn with_slices(mut self, slices: usize) -> Self {
        self.slices = slices.max(3);
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn slices(&self) -> usize {
        self.slices
    }

    /// Sets the radius, keeping the current value on rejection.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ValidationError::InvalidDimension {
                name: "radius",
                value: radius,
            });
        }
        self.radius = radius;
        Ok(())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ensure_finite("center.x", self.center.x)?;
        ensure_finite("center.y", self.center.y)?;
        ensure_finite("center.z", self.center.z)?;
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ValidationError::InvalidDimension {
                name: "radius",
                value: self.radius,
            });
        }
        // A file can carry any slice count; below 3 the polygon encloses
        // no area and the vertex cache degenerates.
        if self.slices < 3 {
            return Err(ValidationError::InvalidDimension {
                name: "slices",
                value: self.slices as f64,
            });
        }
        Ok(())
    }
}

impl DesignerShape for DesignCircle {
    /// The stored center is the centroid.
    fn centroid(&self) -> Point {
        self.center
    }

    fn defining_points(&self) -> SmallVec<[Point; 3]> {
        smallvec![self.center]
    }

    fn vertex_count(&self) -> usize {
        self.slices
    }

    fn transformed_vertices(&self, matrix: &Mat3) -> Vec<f64> {
        let mut data = Vec::with_capacity(self.slices * 3);
        let angle_step = 2.0 * std::f64::consts::PI / self.slices as f64;

        for slice in 0..self.slices {
            let angle = slice as f64 * angle_step;
            let p = Point::with_z(
                self.center.x + angle.cos() * self.radius,
                self.center.y + angle.sin() * self.radius,
                self.center.z,
            );
            let t = matrix.transform_point(&p);
            data.extend_from_slice(&[t.x, t.y, t.z]);
        }
        data
    }
}
