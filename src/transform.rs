//! Coordinate transforms between data and canvas space.

use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::view::{AxisRange, Viewport};

/// Capability to map data coordinates onto a canvas.
///
/// The plotting core only needs this one method from its axes, so any host
/// coordinate system can stand in for [`Axes`](crate::axes::Axes).
pub trait CanvasMapping {
    /// Map a data point into canvas space.
    ///
    /// Non-finite input yields a non-finite canvas point rather than being
    /// dropped, so callers keep a one-to-one point count.
    fn map_to_canvas(&self, point: Point) -> ScreenPoint;
}

/// Linear transform from a viewport into a canvas rectangle.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    x: AxisRange,
    y: AxisRange,
    canvas: ScreenRect,
}

impl Transform {
    /// Create a transform filling a `width` x `height` canvas with the viewport.
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            x: viewport.x,
            y: viewport.y,
            canvas: ScreenRect::from_size(viewport.width, viewport.height),
        }
    }

    /// Access the canvas rectangle.
    pub fn canvas(&self) -> ScreenRect {
        self.canvas
    }

    /// Map a data point into canvas space.
    pub fn data_to_screen(&self, point: Point) -> ScreenPoint {
        let x_norm = (point.x - self.x.min) / self.x.span();
        let y_norm = (point.y - self.y.min) / self.y.span();
        let sx = self.canvas.min.x as f64 + x_norm * self.canvas.width() as f64;
        let sy = self.canvas.max.y as f64 - y_norm * self.canvas.height() as f64;
        ScreenPoint::new(sx as f32, sy as f32)
    }

    /// Map a canvas point back into data space.
    pub fn screen_to_data(&self, point: ScreenPoint) -> Point {
        let x_norm = (point.x as f64 - self.canvas.min.x as f64) / self.canvas.width() as f64;
        let y_norm = (self.canvas.max.y as f64 - point.y as f64) / self.canvas.height() as f64;
        Point::new(
            self.x.min + x_norm * self.x.span(),
            self.y.min + y_norm * self.y.span(),
        )
    }
}

impl CanvasMapping for Transform {
    fn map_to_canvas(&self, point: Point) -> ScreenPoint {
        self.data_to_screen(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(
            AxisRange::new(0.0, 10.0, 1.0).unwrap(),
            AxisRange::new(0.0, 10.0, 1.0).unwrap(),
            100.0,
            100.0,
        )
        .unwrap()
    }

    #[test]
    fn linear_roundtrip() {
        let transform = Transform::new(&viewport());
        let point = Point::new(5.0, 7.5);
        let screen_point = transform.data_to_screen(point);
        let roundtrip = transform.screen_to_data(screen_point);
        assert!((roundtrip.x - point.x).abs() < 1e-4);
        assert!((roundtrip.y - point.y).abs() < 1e-4);
    }

    #[test]
    fn y_axis_points_up() {
        let transform = Transform::new(&viewport());
        let bottom_left = transform.data_to_screen(Point::new(0.0, 0.0));
        let top_right = transform.data_to_screen(Point::new(10.0, 10.0));
        assert_eq!(bottom_left, ScreenPoint::new(0.0, 100.0));
        assert_eq!(top_right, ScreenPoint::new(100.0, 0.0));
    }

    #[test]
    fn non_finite_input_stays_non_finite() {
        let transform = Transform::new(&viewport());
        let mapped = transform.map_to_canvas(Point::new(1.0, f64::INFINITY));
        assert!(!mapped.is_finite());
    }
}
