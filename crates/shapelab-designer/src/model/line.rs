use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use shapelab_core::error::{ensure_finite, Result};
use shapelab_core::{Mat3, Point};

use super::DesignerShape;

/// A line segment between two endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignLine {
    pub start: Point,
    pub end: Point,
}

impl DesignLine {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ensure_finite("start.x", self.start.x)?;
        ensure_finite("start.y", self.start.y)?;
        ensure_finite("end.x", self.end.x)?;
        ensure_finite("end.y", self.end.y)?;
        Ok(())
    }
}

impl DesignerShape for DesignLine {
    /// The midpoint of the two endpoints (x and y; z defaults to 0).
    fn centroid(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    fn defining_points(&self) -> SmallVec<[Point; 3]> {
        smallvec![self.start, self.end]
    }

    fn vertex_count(&self) -> usize {
        2
    }

    fn transformed_vertices(&self, matrix: &Mat3) -> Vec<f64> {
        let a = matrix.transform_point(&self.start);
        let b = matrix.transform_point(&self.end);
        vec![a.x, a.y, a.z, b.x, b.y, b.z]
    }
}
