//! Transform parameters and the composite-matrix builder.

use serde::{Deserialize, Serialize};

use shapelab_core::error::{ensure_finite, Result};
use shapelab_core::{Mat3, Point};

/// The per-shape transform parameters collected from the property form.
///
/// Angles are stored in degrees, matching the form units; conversion to
/// radians happens once, at the rotation-matrix call inside
/// [`compose_transform`]. Fields are private so that every write goes
/// through a finiteness check; a rejected write keeps the prior value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformParams {
    tx: f64,
    ty: f64,
    sx: f64,
    sy: f64,
    rotation_degrees: f64,
    rotate_around_centroid: bool,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            tx: 0.0,
            ty: 0.0,
            sx: 1.0,
            sy: 1.0,
            rotation_degrees: 0.0,
            rotate_around_centroid: false,
        }
    }
}

impl TransformParams {
    pub fn tx(&self) -> f64 {
        self.tx
    }

    pub fn ty(&self) -> f64 {
        self.ty
    }

    pub fn sx(&self) -> f64 {
        self.sx
    }

    pub fn sy(&self) -> f64 {
        self.sy
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    pub fn rotate_around_centroid(&self) -> bool {
        self.rotate_around_centroid
    }

    /// Sets the translation offsets.
    pub fn set_translation(&mut self, tx: f64, ty: f64) -> Result<()> {
        let tx = ensure_finite("tx", tx)?;
        let ty = ensure_finite("ty", ty)?;
        self.tx = tx;
        self.ty = ty;
        Ok(())
    }

    /// Sets the scale factors.
    pub fn set_scale(&mut self, sx: f64, sy: f64) -> Result<()> {
        let sx = ensure_finite("sx", sx)?;
        let sy = ensure_finite("sy", sy)?;
        self.sx = sx;
        self.sy = sy;
        Ok(())
    }

    /// Sets the rotation angle in degrees.
    pub fn set_rotation_degrees(&mut self, degrees: f64) -> Result<()> {
        self.rotation_degrees = ensure_finite("rotation", degrees)?;
        Ok(())
    }

    /// Chooses the rotation pivot: the shape centroid (true) or the
    /// origin (false). Scale always pivots on the centroid regardless.
    pub fn set_rotate_around_centroid(&mut self, around_centroid: bool) {
        self.rotate_around_centroid = around_centroid;
    }

    /// Re-checks every numeric field. Used when parameters arrive from a
    /// deserialized design file rather than through the setters.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("tx", self.tx)?;
        ensure_finite("ty", self.ty)?;
        ensure_finite("sx", self.sx)?;
        ensure_finite("sy", self.sy)?;
        ensure_finite("rotation", self.rotation_degrees)?;
        Ok(())
    }

    /// True when every parameter is at its default, i.e. the composite
    /// matrix is the identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Builds the composite transform for a shape with the given centroid.
///
/// The order is significant and must not be rearranged:
/// 1. scale around the centroid: `fromOrigin · S · toOrigin`;
/// 2. rotation around the centroid or the origin per the pivot flag;
/// 3. translation last: `composite = T · R_op · S_op`, so a point is
///    scaled first, then rotated, then translated.
pub fn compose_transform(centroid: Point, params: &TransformParams) -> Mat3 {
    let to_origin = Mat3::translation(-centroid.x, -centroid.y);
    let from_origin = Mat3::translation(centroid.x, centroid.y);

    let scale_op = from_origin * Mat3::scale(params.sx, params.sy) * to_origin;

    let rotation = Mat3::rotation(params.rotation_degrees.to_radians());
    let rotation_op = if params.rotate_around_centroid {
        from_origin * rotation * to_origin
    } else {
        rotation
    };

    Mat3::translation(params.tx, params.ty) * rotation_op * scale_op
}
