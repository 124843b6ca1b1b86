//! gpui_figure plots functions and coordinate data as smooth curves on
//! auto-fitted axes, and paints them inside GPUI views.
//!
//! The plotting core ([`Figure`] and the modules it builds on) has no GPUI
//! dependency; [`gpui_backend`] only paints the render list a figure produces.

#![forbid(unsafe_code)]

pub mod axes;
pub mod axis;
pub mod curve;
pub mod error;
pub mod figure;
pub mod fit;
pub mod geom;
pub mod gpui_backend;
pub mod input;
pub mod render;
pub mod sampling;
pub mod scene;
pub mod style;
pub mod transform;
pub mod view;

pub use axes::{Axes, AxisLabels, Label, Tick};
pub use axis::{AxesConfig, AxisConfig, AxisFormatter, Direction};
pub use curve::{CubicSegment, Curve, StrokeStyle};
pub use error::{FigureError, Result};
pub use figure::{Figure, FigureBuilder, FigureConfig, FigureState};
pub use fit::{FitMode, fit_axes};
pub use geom::{Point, ScreenPoint, ScreenRect};
pub use gpui_backend::{FigureHandle, FigureViewConfig, GpuiFigureView};
pub use input::{FigureInput, FunctionId, PlotFn, PlotInput, SampleSource};
pub use render::{Color, LineStyle, RenderCommand, RenderList, TextMeasurer, TextStyle};
pub use sampling::{SampleCache, SampleKey, SampleSet};
pub use scene::{Entity, EntityId, Group};
pub use style::Theme;
pub use transform::{CanvasMapping, Transform};
pub use view::{AxisRange, Viewport};
