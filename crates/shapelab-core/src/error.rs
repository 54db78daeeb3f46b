//! Error handling for Shapelab.
//!
//! All fallible value construction and mutation in the core uses
//! `ValidationError` via `thiserror`. The policy follows the editor's
//! boundary contract: invalid input is rejected at the point of
//! assignment and can never corrupt an already-valid value.

use thiserror::Error;

/// Validation error type
///
/// Represents rejected writes to core value types. A rejected write
/// leaves the target unchanged, so callers may either surface the error
/// or ignore it and keep the last good state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A coordinate or transform parameter was NaN or infinite
    #[error("{name} must be a finite number, got {value}")]
    NonFinite {
        /// The field that rejected the write.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A color channel was outside the 0.0..=1.0 range
    #[error("color channel '{channel}' must be in 0.0..=1.0, got {value}")]
    ChannelOutOfRange {
        /// The channel that rejected the write ('r', 'g' or 'b').
        channel: char,
        /// The offending value.
        value: f64,
    },

    /// A shape dimension (e.g. a circle radius) was not finite and positive
    #[error("{name} must be finite and positive, got {value}")]
    InvalidDimension {
        /// The dimension that rejected the write.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// Convenience result alias for core operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Checks that a parameter entering the core from a form binding is a
/// finite number.
pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { name, value })
    }
}
