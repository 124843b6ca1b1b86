//! Axis ranges and the immutable viewport a figure is drawn into.

use crate::error::{FigureError, Result};

/// Visible range of one axis with inclusive bounds and a tick step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
    /// Distance between consecutive ticks.
    pub tick_step: f64,
}

impl AxisRange {
    /// Create a validated axis range.
    ///
    /// Fails unless all values are finite, `min < max` and `tick_step > 0`.
    pub fn new(min: f64, max: f64, tick_step: f64) -> Result<Self> {
        let range = Self {
            min,
            max,
            tick_step,
        };
        if range.is_valid() {
            Ok(range)
        } else {
            Err(FigureError::InvalidRange {
                min,
                max,
                tick_step,
            })
        }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check the range invariants.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.tick_step.is_finite()
            && self.min < self.max
            && self.tick_step > 0.0
    }

    /// Check whether a value lies inside the inclusive bounds.
    ///
    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Clamp a value into the range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Tick values from `min` toward `max`.
    ///
    /// Uses `tick_step` unless that would exceed [`MAX_TICKS`] intervals, in
    /// which case the step is coarsened to a 1-2-5 multiple.
    pub fn ticks(&self) -> Vec<f64> {
        let span = self.span();
        if !span.is_finite() {
            return vec![self.min, self.max];
        }
        let step = if span / self.tick_step <= MAX_TICKS as f64 {
            self.tick_step
        } else {
            nice_step(span / MAX_TICKS as f64)
        };
        let count = ((span / step + 1e-9).floor() as usize).min(MAX_TICKS);
        (0..=count)
            .map(|i| (self.min + step * i as f64).min(self.max))
            .collect()
    }
}

/// Upper bound on tick intervals per axis.
pub const MAX_TICKS: usize = 64;

/// Smallest 1-2-5 multiple of a power of ten that is at least `raw`.
fn nice_step(raw: f64) -> f64 {
    let base = 10f64.powf(raw.log10().floor());
    let n = raw / base;
    let nice = if n <= 1.0 {
        1.0
    } else if n <= 2.0 {
        2.0
    } else if n <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Default x range when the caller does not give one.
pub const DEFAULT_X_RANGE: AxisRange = AxisRange {
    min: -8.0,
    max: 8.0,
    tick_step: 1.0,
};

/// Default y range when the caller does not give one.
pub const DEFAULT_Y_RANGE: AxisRange = AxisRange {
    min: -4.0,
    max: 4.0,
    tick_step: 1.0,
};

/// Visible data ranges on both axes plus the canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// X axis range.
    pub x: AxisRange,
    /// Y axis range.
    pub y: AxisRange,
    /// Canvas width in logical pixels.
    pub width: f32,
    /// Canvas height in logical pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport, validating both ranges and the canvas size.
    pub fn new(x: AxisRange, y: AxisRange, width: f32, height: f32) -> Result<Self> {
        for range in [x, y] {
            if !range.is_valid() {
                return Err(FigureError::InvalidRange {
                    min: range.min,
                    max: range.max,
                    tick_step: range.tick_step,
                });
            }
        }
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(FigureError::InvalidSize { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_and_zero_step_ranges() {
        assert!(AxisRange::new(1.0, 0.0, 1.0).is_err());
        assert!(AxisRange::new(0.0, 0.0, 1.0).is_err());
        assert!(AxisRange::new(0.0, 1.0, 0.0).is_err());
        assert!(AxisRange::new(0.0, f64::INFINITY, 1.0).is_err());
        assert!(AxisRange::new(-1.0, 1.0, 0.5).is_ok());
    }

    #[test]
    fn contains_is_inclusive_and_rejects_nan() {
        let range = AxisRange::new(-5.0, 5.0, 1.0).unwrap();
        assert!(range.contains(-5.0));
        assert!(range.contains(5.0));
        assert!(!range.contains(5.0001));
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn ticks_cover_both_ends() {
        let range = AxisRange::new(0.0, 4.0, 1.0).unwrap();
        assert_eq!(range.ticks(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        let range = AxisRange::new(0.0, 2.5, 1.0).unwrap();
        assert_eq!(range.ticks(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn dense_ticks_are_coarsened() {
        let range = AxisRange::new(0.0, 1e300, 1.0).unwrap();
        let ticks = range.ticks();
        assert!(ticks.len() <= MAX_TICKS + 1);
        assert!(ticks.len() > 1);
        assert_eq!(ticks[0], 0.0);
        assert!(ticks.iter().all(|tick| range.contains(*tick)));

        let range = AxisRange::new(0.0, 1000.0, 1.0).unwrap();
        let ticks = range.ticks();
        assert_eq!(ticks.len(), 51);
        assert_eq!(ticks[1], 20.0);
    }

    #[test]
    fn ticks_survive_overflowing_span() {
        let range = AxisRange::new(-f64::MAX, f64::MAX, 1.0).unwrap();
        assert_eq!(range.ticks(), vec![-f64::MAX, f64::MAX]);
    }

    #[test]
    fn viewport_rejects_empty_canvas() {
        let err = Viewport::new(DEFAULT_X_RANGE, DEFAULT_Y_RANGE, 0.0, 10.0).unwrap_err();
        assert_eq!(
            err,
            FigureError::InvalidSize {
                width: 0.0,
                height: 10.0
            }
        );
    }
}
