//! Canvas value types: drawing modes, tool settings, and the drawing
//! object that pairs a shape with its transform state.

use serde::{Deserialize, Serialize};

use shapelab_core::error::Result;
use shapelab_core::{Color, Mat3};

use crate::model::{next_shape_id, DesignerShape, Shape, ShapeId};
use crate::transform::{compose_transform, TransformParams};

/// Which shape the next clicks on the canvas will place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawingMode {
    Circle,
    Line,
    Triangle,
}

impl Default for DrawingMode {
    fn default() -> Self {
        DrawingMode::Circle
    }
}

impl DrawingMode {
    /// How many placed points complete a shape in this mode.
    pub fn points_required(&self) -> usize {
        match self {
            DrawingMode::Circle => 1,
            DrawingMode::Line => 2,
            DrawingMode::Triangle => 3,
        }
    }
}

/// The property-form values applied to newly placed shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    pub color: Color,
    pub filled: bool,
    /// Radius for circle placement; other modes take their geometry
    /// entirely from the clicked points.
    pub radius: f64,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            filled: true,
            radius: 50.0,
        }
    }
}

/// A shape on the canvas together with its appearance, transform
/// parameters, composite matrix, and cached transformed vertices.
///
/// The matrix and vertex cache are derived state: every mutation path
/// re-derives them in the same call, so they are never stale relative
/// to the stored parameters or geometry. Persistence goes through
/// [`crate::serialization`], which stores only the defining state and
/// re-derives the rest on load.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingObject {
    id: ShapeId,
    shape: Shape,
    color: Color,
    filled: bool,
    params: TransformParams,
    matrix: Mat3,
    vertices: Vec<f64>,
}

impl DrawingObject {
    pub(crate) fn new(shape: Shape, color: Color, filled: bool) -> Self {
        let id = next_shape_id(shape.shape_type());
        Self::assemble(id, shape, color, filled, TransformParams::default())
    }

    /// Rebuilds an object from persisted state, keeping its original id.
    pub(crate) fn assemble(
        id: ShapeId,
        shape: Shape,
        color: Color,
        filled: bool,
        params: TransformParams,
    ) -> Self {
        let mut obj = Self {
            id,
            shape,
            color,
            filled,
            params,
            matrix: Mat3::IDENTITY,
            vertices: Vec::new(),
        };
        obj.rebuild();
        obj
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn filled(&self) -> bool {
        self.filled
    }

    pub fn params(&self) -> &TransformParams {
        &self.params
    }

    /// The composite matrix for the current parameters.
    pub fn matrix(&self) -> &Mat3 {
        &self.matrix
    }

    /// The transformed vertex list: x,y,z triples, 2 points for a line,
    /// 3 for a triangle, one per slice for a circle.
    pub fn vertices(&self) -> &[f64] {
        &self.vertices
    }

    /// Human-readable name for scene lists, e.g. `circle-3`.
    pub fn label(&self) -> String {
        self.id.to_string()
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.filled = filled;
    }

    pub fn set_translation(&mut self, tx: f64, ty: f64) -> Result<()> {
        self.params.set_translation(tx, ty)?;
        self.rebuild();
        Ok(())
    }

    pub fn set_scale(&mut self, sx: f64, sy: f64) -> Result<()> {
        self.params.set_scale(sx, sy)?;
        self.rebuild();
        Ok(())
    }

    pub fn set_rotation_degrees(&mut self, degrees: f64) -> Result<()> {
        self.params.set_rotation_degrees(degrees)?;
        self.rebuild();
        Ok(())
    }

    pub fn set_rotate_around_centroid(&mut self, around_centroid: bool) {
        self.params.set_rotate_around_centroid(around_centroid);
        self.rebuild();
    }

    /// Replaces all transform parameters at once.
    pub fn set_params(&mut self, params: TransformParams) -> Result<()> {
        params.validate()?;
        self.params = params;
        self.rebuild();
        Ok(())
    }

    /// Edits the underlying geometry (e.g. a circle radius), then
    /// re-derives the matrix and vertex cache. The centroid may move, so
    /// the whole pipeline runs again.
    pub fn edit_shape(&mut self, edit: impl FnOnce(&mut Shape)) {
        edit(&mut self.shape);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.matrix = compose_transform(self.shape.centroid(), &self.params);
        self.vertices = self.shape.transformed_vertices(&self.matrix);
        tracing::trace!(id = %self.id, "rebuilt composite transform");
    }
}
