//! # Shapelab Designer
//!
//! The shape model and transform pipeline behind the Shapelab editor.
//! Users place circles, lines, and triangles on a canvas, tweak their
//! color, fill, and transform parameters, and the rendering layer draws
//! the resulting vertex buffers.
//!
//! ## Architecture
//!
//! ```text
//! Canvas (scene collection + click-to-place flow)
//!   └── DrawingObject (id, color, fill, transform params)
//!         ├── Shape (Circle | Line | Triangle geometry)
//!         ├── Mat3 (composite transform, rebuilt on every change)
//!         └── vertex cache (flat x,y,z triples for buffer upload)
//! ```
//!
//! The composite matrix always encodes translate ∘ rotate ∘ scale for
//! the object's current parameters: scale pivots on the shape centroid,
//! rotation pivots on the centroid or the origin per a flag, and
//! translation applies last. Parameter setters rebuild the matrix and
//! the vertex cache together, so a renderer never observes a matrix
//! stale relative to the stored parameters.

pub mod canvas;
pub mod model;
pub mod serialization;
pub mod transform;

pub use canvas::{Canvas, DrawingMode, DrawingObject, ToolSettings};
pub use model::{
    DesignCircle, DesignLine, DesignTriangle, DesignerShape, Shape, ShapeId, ShapeType,
};
pub use serialization::{from_json, load_design, save_design, to_json, DesignFile};
pub use transform::{compose_transform, TransformParams};
