//! Axes: the viewport's data-to-canvas mapping plus axis geometry.

use crate::axis::AxesConfig;
use crate::error::{FigureError, Result};
use crate::geom::{Point, ScreenPoint};
use crate::transform::{CanvasMapping, Transform};
use crate::view::{AxisRange, Viewport};

/// Gap between an axis end and its label, in pixels.
const LABEL_BUFF: f32 = 6.0;

/// A tick mark on an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Data value at the tick.
    pub value: f64,
    /// Canvas position on the axis line.
    pub position: ScreenPoint,
}

/// A text label anchored in canvas space.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Label text.
    pub text: String,
    /// Bottom-left corner of the text.
    pub position: ScreenPoint,
}

impl Label {
    /// Move the label by a pixel offset.
    pub fn shifted(mut self, dx: f32, dy: f32) -> Self {
        self.position = self.position.offset(dx, dy);
        self
    }
}

/// The pair of axis labels attached to a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabels {
    /// Label at the end of the x axis.
    pub x: Label,
    /// Label at the top of the y axis.
    pub y: Label,
}

/// Coordinate axes for a fixed viewport.
#[derive(Debug, Clone)]
pub struct Axes {
    viewport: Viewport,
    config: AxesConfig,
    transform: Transform,
}

impl Axes {
    /// Create axes for a viewport.
    pub fn new(viewport: Viewport, config: AxesConfig) -> Self {
        Self {
            transform: Transform::new(&viewport),
            viewport,
            config,
        }
    }

    /// Access the viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Visible x range.
    pub fn x_range(&self) -> &AxisRange {
        &self.viewport.x
    }

    /// Visible y range.
    pub fn y_range(&self) -> &AxisRange {
        &self.viewport.y
    }

    /// Access the display configuration.
    pub fn config(&self) -> &AxesConfig {
        &self.config
    }

    /// Map paired data coordinates into canvas points, one per pair.
    pub fn data_to_canvas(&self, xs: &[f64], ys: &[f64]) -> Result<Vec<ScreenPoint>> {
        if xs.len() != ys.len() {
            return Err(FigureError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        Ok(xs
            .iter()
            .zip(ys)
            .map(|(x, y)| self.map_to_canvas(Point::new(*x, *y)))
            .collect())
    }

    /// Data point where the axis lines cross: the origin clamped into view.
    pub fn crossing(&self) -> Point {
        Point::new(self.viewport.x.clamp(0.0), self.viewport.y.clamp(0.0))
    }

    /// Endpoints of the x axis line in canvas space.
    pub fn x_axis_line(&self) -> (ScreenPoint, ScreenPoint) {
        let y = self.crossing().y;
        (
            self.map_to_canvas(Point::new(self.viewport.x.min, y)),
            self.map_to_canvas(Point::new(self.viewport.x.max, y)),
        )
    }

    /// Endpoints of the y axis line in canvas space, bottom to top.
    pub fn y_axis_line(&self) -> (ScreenPoint, ScreenPoint) {
        let x = self.crossing().x;
        (
            self.map_to_canvas(Point::new(x, self.viewport.y.min)),
            self.map_to_canvas(Point::new(x, self.viewport.y.max)),
        )
    }

    /// Ticks along the x axis.
    pub fn x_ticks(&self) -> Vec<Tick> {
        let y = self.crossing().y;
        self.viewport
            .x
            .ticks()
            .into_iter()
            .map(|value| Tick {
                value,
                position: self.map_to_canvas(Point::new(value, y)),
            })
            .collect()
    }

    /// Ticks along the y axis.
    pub fn y_ticks(&self) -> Vec<Tick> {
        let x = self.crossing().x;
        self.viewport
            .y
            .ticks()
            .into_iter()
            .map(|value| Tick {
                value,
                position: self.map_to_canvas(Point::new(x, value)),
            })
            .collect()
    }

    /// Label placed above and right of the x axis end.
    pub fn x_axis_label(&self, text: impl Into<String>) -> Label {
        let (_, end) = self.x_axis_line();
        Label {
            text: text.into(),
            position: end.offset(LABEL_BUFF, -LABEL_BUFF),
        }
    }

    /// Label placed above and right of the y axis top.
    pub fn y_axis_label(&self, text: impl Into<String>) -> Label {
        let (_, top) = self.y_axis_line();
        Label {
            text: text.into(),
            position: top.offset(LABEL_BUFF, -LABEL_BUFF),
        }
    }
}

impl CanvasMapping for Axes {
    fn map_to_canvas(&self, point: Point) -> ScreenPoint {
        self.transform.data_to_screen(point)
    }
}
