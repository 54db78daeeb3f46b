//! RGB color value type with range-checked channels.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// A color as a red-green-blue triple with channels in `0.0..=1.0`.
///
/// Channels are private so that an out-of-range write can never land: the
/// setters reject bad values and leave the previous channel value in
/// place, returning the error for callers that want to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

fn check_channel(channel: char, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::ChannelOutOfRange { channel, value })
    }
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    // Pure green is called lime to match the SVG naming convention,
    // where "green" means the darker half-intensity color.
    pub const LIME: Color = Color {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };
    pub const BLUE: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
    pub const CYAN: Color = Color {
        r: 0.0,
        g: 1.0,
        b: 1.0,
    };
    pub const MAGENTA: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 1.0,
    };
    pub const YELLOW: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 0.0,
    };

    /// Creates a color, rejecting any channel outside `0.0..=1.0`.
    pub fn new(r: f64, g: f64, b: f64) -> Result<Self> {
        Ok(Self {
            r: check_channel('r', r)?,
            g: check_channel('g', g)?,
            b: check_channel('b', b)?,
        })
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Sets the red channel, keeping the current value on rejection.
    pub fn set_r(&mut self, r: f64) -> Result<()> {
        self.r = check_channel('r', r)?;
        Ok(())
    }

    /// Sets the green channel, keeping the current value on rejection.
    pub fn set_g(&mut self, g: f64) -> Result<()> {
        self.g = check_channel('g', g)?;
        Ok(())
    }

    /// Sets the blue channel, keeping the current value on rejection.
    pub fn set_b(&mut self, b: f64) -> Result<()> {
        self.b = check_channel('b', b)?;
        Ok(())
    }

    /// Re-checks every channel. Used when a color arrives from a
    /// deserialized design file rather than through the setters.
    pub fn validate(&self) -> Result<()> {
        check_channel('r', self.r)?;
        check_channel('g', self.g)?;
        check_channel('b', self.b)?;
        Ok(())
    }

    /// The channels as an `[r, g, b]` array in the layout a graphics
    /// binding expects for a vec3 uniform.
    pub fn to_array(&self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
