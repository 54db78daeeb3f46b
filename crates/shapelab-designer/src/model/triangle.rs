use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use shapelab_core::error::{ensure_finite, Result};
use shapelab_core::{Mat3, Point};

use super::DesignerShape;

/// A triangle defined by three vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignTriangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl DesignTriangle {
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("p1.x", self.p1.x),
            ("p1.y", self.p1.y),
            ("p2.x", self.p2.x),
            ("p2.y", self.p2.y),
            ("p3.x", self.p3.x),
            ("p3.y", self.p3.y),
        ] {
            ensure_finite(name, value)?;
        }
        Ok(())
    }
}

impl DesignerShape for DesignTriangle {
    /// The arithmetic mean of all three vertices, z included.
    fn centroid(&self) -> Point {
        Point::with_z(
            (self.p1.x + self.p2.x + self.p3.x) / 3.0,
            (self.p1.y + self.p2.y + self.p3.y) / 3.0,
            (self.p1.z + self.p2.z + self.p3.z) / 3.0,
        )
    }

    fn defining_points(&self) -> SmallVec<[Point; 3]> {
        smallvec![self.p1, self.p2, self.p3]
    }

    fn vertex_count(&self) -> usize {
        3
    }

    fn transformed_vertices(&self, matrix: &Mat3) -> Vec<f64> {
        let mut data = Vec::with_capacity(9);
        for p in [&self.p1, &self.p2, &self.p3] {
            let t = matrix.transform_point(p);
            data.extend_from_slice(&[t.x, t.y, t.z]);
        }
        data
    }
}
