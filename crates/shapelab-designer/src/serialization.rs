//! Save/load for design files.
//!
//! A design file is JSON holding only defining state: shape geometry,
//! appearance, and transform parameters. Composite matrices and vertex
//! caches are derived on load, and the per-type id counters are advanced
//! past every loaded id so later allocations stay unique.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use shapelab_core::Color;

use crate::canvas::{Canvas, DrawingObject};
use crate::model::{reserve_shape_id, Shape, ShapeId};
use crate::transform::TransformParams;

/// Design file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete design file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub version: String,
    pub shapes: Vec<ShapeRecord>,
}

/// Serialized per-shape state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub id: ShapeId,
    pub shape: Shape,
    pub color: Color,
    pub filled: bool,
    #[serde(default)]
    pub params: TransformParams,
}

impl DesignFile {
    /// Captures the current canvas contents.
    pub fn from_canvas(canvas: &Canvas) -> Self {
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            shapes: canvas
                .shapes()
                .map(|obj| ShapeRecord {
                    id: obj.id(),
                    shape: obj.shape().clone(),
                    color: obj.color(),
                    filled: obj.filled(),
                    params: *obj.params(),
                })
                .collect(),
        }
    }

    /// Rebuilds a canvas, validating every record and re-deriving the
    /// matrices and vertex caches. Malformed geometry or non-finite
    /// parameters fail fast rather than entering the pipeline.
    pub fn into_canvas(self) -> Result<Canvas> {
        if self.version != FILE_FORMAT_VERSION {
            warn!(
                version = %self.version,
                expected = FILE_FORMAT_VERSION,
                "design file version differs; attempting load anyway"
            );
        }

        let mut canvas = Canvas::new();
        for record in self.shapes {
            record
                .shape
                .validate()
                .with_context(|| format!("invalid geometry for shape {}", record.id))?;
            record
                .params
                .validate()
                .with_context(|| format!("invalid transform parameters for shape {}", record.id))?;
            record
                .color
                .validate()
                .with_context(|| format!("invalid color for shape {}", record.id))?;
            reserve_shape_id(record.id);
            canvas.push_object(DrawingObject::assemble(
                record.id,
                record.shape,
                record.color,
                record.filled,
                record.params,
            ));
        }
        Ok(canvas)
    }
}

/// Serializes a canvas to a JSON design document.
pub fn to_json(canvas: &Canvas) -> Result<String> {
    serde_json::to_string_pretty(&DesignFile::from_canvas(canvas))
        .context("failed to serialize design")
}

/// Deserializes a canvas from a JSON design document.
pub fn from_json(json: &str) -> Result<Canvas> {
    let file: DesignFile = serde_json::from_str(json).context("failed to parse design file")?;
    file.into_canvas()
}

/// Saves a canvas to a design file on disk.
pub fn save_design(canvas: &Canvas, path: &Path) -> Result<()> {
    let json = to_json(canvas)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write design file {}", path.display()))?;
    debug!(path = %path.display(), shapes = canvas.shape_count(), "saved design");
    Ok(())
}

/// Loads a canvas from a design file on disk.
pub fn load_design(path: &Path) -> Result<Canvas> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read design file {}", path.display()))?;
    let canvas = from_json(&json)?;
    debug!(path = %path.display(), shapes = canvas.shape_count(), "loaded design");
    Ok(canvas)
}
