//! Shape geometry model.
//!
//! Each variant owns its defining geometry and knows how to compute its
//! own centroid and regenerate its transformed vertex list from a
//! composite matrix. Dispatch is a tagged enum rather than a class
//! hierarchy; the shared capability set lives in [`DesignerShape`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use shapelab_core::error::Result;
use shapelab_core::{Mat3, Point};

mod circle;
mod line;
mod triangle;

pub use circle::DesignCircle;
pub use line::DesignLine;
pub use triangle::DesignTriangle;

/// Shared capability set for all shape variants.
pub trait DesignerShape {
    /// The pivot point for scaling and (conditionally) rotation.
    fn centroid(&self) -> Point;

    /// The shape's untransformed control points.
    fn defining_points(&self) -> SmallVec<[Point; 3]>;

    /// The number of vertices this shape renders with.
    fn vertex_count(&self) -> usize;

    /// Regenerates the renderable vertex list under `matrix`: a flat
    /// ordered sequence of x,y,z triples, stable across repeated calls
    /// for unchanged inputs.
    fn transformed_vertices(&self, matrix: &Mat3) -> Vec<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Circle,
    Line,
    Triangle,
}

impl ShapeType {
    fn name(&self) -> &'static str {
        match self {
            ShapeType::Circle => "circle",
            ShapeType::Line => "line",
            ShapeType::Triangle => "triangle",
        }
    }
}

/// Stable shape identifier: a per-variant-type counter index. Ids are
/// assigned at creation and never reused within a process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId {
    pub shape_type: ShapeType,
    pub index: u64,
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.shape_type.name(), self.index)
    }
}

static CIRCLE_IDS: AtomicU64 = AtomicU64::new(0);
static LINE_IDS: AtomicU64 = AtomicU64::new(0);
static TRIANGLE_IDS: AtomicU64 = AtomicU64::new(0);

fn counter(shape_type: ShapeType) -> &'static AtomicU64 {
    match shape_type {
        ShapeType::Circle => &CIRCLE_IDS,
        ShapeType::Line => &LINE_IDS,
        ShapeType::Triangle => &TRIANGLE_IDS,
    }
}

/// Allocates the next id for a variant type. Process-wide and atomic,
/// so allocation is safe from any thread.
pub(crate) fn next_shape_id(shape_type: ShapeType) -> ShapeId {
    let index = counter(shape_type).fetch_add(1, Ordering::Relaxed) + 1;
    ShapeId { shape_type, index }
}

/// Advances a variant counter past an id loaded from a design file so
/// that later allocations stay unique.
pub(crate) fn reserve_shape_id(id: ShapeId) {
    counter(id.shape_type).fetch_max(id.index, Ordering::Relaxed);
}

/// A shape variant and its defining geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(DesignCircle),
    Line(DesignLine),
    Triangle(DesignTriangle),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Line(_) => ShapeType::Line,
            Shape::Triangle(_) => ShapeType::Triangle,
        }
    }

    /// Fail-fast check for geometry arriving from a design file.
    pub fn validate(&self) -> Result<()> {
        match self {
            Shape::Circle(s) => s.validate(),
            Shape::Line(s) => s.validate(),
            Shape::Triangle(s) => s.validate(),
        }
    }
}

impl DesignerShape for Shape {
    fn centroid(&self) -> Point {
        match self {
            Shape::Circle(s) => s.centroid(),
            Shape::Line(s) => s.centroid(),
            Shape::Triangle(s) => s.centroid(),
        }
    }

    fn defining_points(&self) -> SmallVec<[Point; 3]> {
        match self {
            Shape::Circle(s) => s.defining_points(),
            Shape::Line(s) => s.defining_points(),
            Shape::Triangle(s) => s.defining_points(),
        }
    }

    fn vertex_count(&self) -> usize {
        match self {
            Shape::Circle(s) => s.vertex_count(),
            Shape::Line(s) => s.vertex_count(),
            Shape::Triangle(s) => s.vertex_count(),
        }
    }

    fn transformed_vertices(&self, matrix: &Mat3) -> Vec<f64> {
        match self {
            Shape::Circle(s) => s.transformed_vertices(matrix),
            Shape::Line(s) => s.transformed_vertices(matrix),
            Shape::Triangle(s) => s.transformed_vertices(matrix),
        }
    }
}
