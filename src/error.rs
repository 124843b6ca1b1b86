//! Error types for figure construction and plotting.

use thiserror::Error;

/// Result type alias for figure operations.
pub type Result<T> = std::result::Result<T, FigureError>;

/// Errors that can occur while building or plotting a figure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FigureError {
    /// No function or coordinates were supplied.
    #[error("a function or coordinate pair is required to build a figure")]
    InvalidInput,

    /// Sampling was attempted on a value that is not a function.
    #[error("input is not invocable: {reason}")]
    NotInvocable { reason: String },

    /// An axis range violates `min < max` or `tick_step > 0`.
    #[error("invalid axis range ({min}, {max}, {tick_step})")]
    InvalidRange { min: f64, max: f64, tick_step: f64 },

    /// Auto-fitting found no finite value on an axis.
    #[error("cannot fit the {axis} axis: no finite values")]
    NoFiniteData { axis: &'static str },

    /// Coordinate sequences of different lengths.
    #[error("coordinate length mismatch: {xs} x values, {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },

    /// Canvas size must be finite and positive.
    #[error("invalid canvas size {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
}

impl FigureError {
    /// Create a NotInvocable error.
    pub fn not_invocable(reason: impl Into<String>) -> Self {
        Self::NotInvocable {
            reason: reason.into(),
        }
    }
}
