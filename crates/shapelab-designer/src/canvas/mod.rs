//! Canvas for placing and manipulating shapes.

mod types;

pub use types::{DrawingMode, DrawingObject, ToolSettings};

use tracing::debug;

use shapelab_core::error::Result;
use shapelab_core::{Color, Point};

use crate::model::{DesignCircle, DesignLine, DesignTriangle, Shape, ShapeId};

/// The scene: an ordered collection of drawing objects plus the
/// click-to-place state of the active drawing tool.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    objects: Vec<DrawingObject>,
    mode: DrawingMode,
    pending: Vec<Point>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the drawing mode. Any partially placed shape is discarded.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        if mode != self.mode {
            self.mode = mode;
            self.pending.clear();
        }
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Points clicked so far toward the next shape.
    pub fn pending_points(&self) -> &[Point] {
        &self.pending
    }

    /// Records a canvas click. When enough points have accumulated for
    /// the current mode, the shape is created with the given tool
    /// settings and its id returned. Invalid input (non-finite click
    /// coordinates, bad radius) leaves the pending points untouched.
    pub fn place_point(&mut self, p: Point, settings: &ToolSettings) -> Result<Option<ShapeId>> {
        let p = Point::try_new(p.x, p.y)?;
        if self.pending.len() + 1 < self.mode.points_required() {
            self.pending.push(p);
            return Ok(None);
        }

        let shape = match self.mode {
            DrawingMode::Circle => Shape::Circle(DesignCircle::new(p, settings.radius)?),
            DrawingMode::Line => Shape::Line(DesignLine::new(self.pending[0], p)),
            DrawingMode::Triangle => {
                Shape::Triangle(DesignTriangle::new(self.pending[0], self.pending[1], p))
            }
        };
        self.pending.clear();
        Ok(Some(self.add_shape(shape, settings.color, settings.filled)))
    }

    /// Adds a circle to the canvas.
    pub fn add_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Color,
        filled: bool,
    ) -> Result<ShapeId> {
        let circle = DesignCircle::new(center, radius)?;
        Ok(self.add_shape(Shape::Circle(circle), color, filled))
    }

    /// Adds a line to the canvas.
    pub fn add_line(&mut self, start: Point, end: Point, color: Color, filled: bool) -> ShapeId {
        self.add_shape(Shape::Line(DesignLine::new(start, end)), color, filled)
    }

    /// Adds a triangle to the canvas.
    pub fn add_triangle(
        &mut self,
        p1: Point,
        p2: Point,
        p3: Point,
        color: Color,
        filled: bool,
    ) -> ShapeId {
        self.add_shape(Shape::Triangle(DesignTriangle::new(p1, p2, p3)), color, filled)
    }

    /// Adds a pre-built shape to the canvas.
    pub fn add_shape(&mut self, shape: Shape, color: Color, filled: bool) -> ShapeId {
        let obj = DrawingObject::new(shape, color, filled);
        let id = obj.id();
        debug!(%id, "added shape");
        self.objects.push(obj);
        id
    }

    pub(crate) fn push_object(&mut self, obj: DrawingObject) {
        self.objects.push(obj);
    }

    /// Removes a shape, returning it if it was present.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<DrawingObject> {
        let pos = self.objects.iter().position(|o| o.id() == id)?;
        debug!(%id, "removed shape");
        Some(self.objects.remove(pos))
    }

    pub fn get(&self, id: ShapeId) -> Option<&DrawingObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut DrawingObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    pub fn shape_count(&self) -> usize {
        self.objects.len()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &DrawingObject> {
        self.objects.iter()
    }

    pub fn shapes_mut(&mut self) -> impl Iterator<Item = &mut DrawingObject> {
        self.objects.iter_mut()
    }

    /// Labels for a scene list box, in insertion order.
    pub fn scene_labels(&self) -> Vec<String> {
        self.objects.iter().map(|o| o.label()).collect()
    }

    /// Removes every shape and any partially placed points.
    pub fn clear(&mut self) {
        debug!(count = self.objects.len(), "cleared canvas");
        self.objects.clear();
        self.pending.clear();
    }
}
