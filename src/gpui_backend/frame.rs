use gpui::{Bounds, Pixels, Window};

use crate::figure::Figure;
use crate::geom::ScreenPoint;
use crate::render::{RenderList, build_figure};

use super::config::FigureViewConfig;
use super::text::GpuiTextMeasurer;

#[derive(Debug, Clone)]
pub(crate) struct FigureFrame {
    pub(crate) render: RenderList,
    /// Window position of the figure canvas' top-left corner.
    pub(crate) origin: ScreenPoint,
    pub(crate) font_family: String,
}

pub(crate) fn build_frame(
    figure: &Figure,
    config: &FigureViewConfig,
    bounds: Bounds<Pixels>,
    window: &Window,
) -> FigureFrame {
    let measurer = GpuiTextMeasurer::new(window, &config.font_family);
    let render = build_figure(figure, &config.theme, config.text_size, &measurer);

    let viewport = figure.viewport();
    let origin = ScreenPoint::new(
        f32::from(bounds.origin.x) + (f32::from(bounds.size.width) - viewport.width) * 0.5,
        f32::from(bounds.origin.y) + (f32::from(bounds.size.height) - viewport.height) * 0.5,
    );

    FigureFrame {
        render,
        origin,
        font_family: config.font_family.clone(),
    }
}
