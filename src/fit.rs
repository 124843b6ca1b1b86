//! Viewport fitting from caller ranges or data extents.

use tracing::debug;

use crate::error::{FigureError, Result};
use crate::view::AxisRange;

/// Padding applied on each side of an axis whose data has zero span.
pub const DEGENERATE_PADDING: f64 = 0.5;

/// How the visible ranges of a figure are chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitMode {
    /// Use the caller's ranges unchanged.
    Explicit {
        /// X range.
        x: AxisRange,
        /// Y range.
        y: AxisRange,
    },
    /// Fit tightly around the data with the given tick steps.
    AutoFit {
        /// Tick step for the fitted x range.
        tick_x: f64,
        /// Tick step for the fitted y range.
        tick_y: f64,
    },
}

/// Compute the `(x, y)` ranges for a viewport.
///
/// In auto-fit mode the ranges are the extents of `xs` and `ys`, which must
/// be the unclipped data.
pub fn fit_axes(mode: FitMode, xs: &[f64], ys: &[f64]) -> Result<(AxisRange, AxisRange)> {
    match mode {
        FitMode::Explicit { x, y } => Ok((x, y)),
        FitMode::AutoFit { tick_x, tick_y } => {
            let x = fit_axis(xs, tick_x, "x")?;
            let y = fit_axis(ys, tick_y, "y")?;
            debug!(
                x_min = x.min,
                x_max = x.max,
                y_min = y.min,
                y_max = y.max,
                "fitted axes to data"
            );
            Ok((x, y))
        }
    }
}

/// Extent of the finite values in `values`, padded when degenerate.
fn fit_axis(values: &[f64], tick_step: f64, axis: &'static str) -> Result<AxisRange> {
    let (low, high) = finite_extent(values).ok_or(FigureError::NoFiniteData { axis })?;
    if high - low == 0.0 {
        return AxisRange::new(low - DEGENERATE_PADDING, high + DEGENERATE_PADDING, tick_step);
    }
    AxisRange::new(low, high, tick_step)
}

fn finite_extent(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((low, high)) => Some((low.min(value), high.max(value))),
        })
}
