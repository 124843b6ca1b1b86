use gpui::{App, PathBuilder, Window, point, px};

use crate::geom::ScreenPoint;
use crate::render::{Color, LineStyle, RenderCommand, TextStyle};

use super::frame::FigureFrame;
use super::text::shape_text;

pub(crate) fn paint_frame(frame: &FigureFrame, window: &mut Window, cx: &mut App) {
    let origin = frame.origin;
    for command in frame.render.commands() {
        match command {
            RenderCommand::Polyline { points, style } => {
                paint_polyline(window, origin, points, *style);
            }
            // Rotation is not supported by shaped lines; text is painted upright.
            RenderCommand::Text {
                position,
                text,
                style,
                ..
            } => {
                paint_text(
                    window,
                    cx,
                    &frame.font_family,
                    position.offset(origin.x, origin.y),
                    text,
                    style,
                );
            }
        }
    }
}

fn paint_polyline(window: &mut Window, origin: ScreenPoint, points: &[ScreenPoint], style: LineStyle) {
    let [first, rest @ ..] = points else {
        return;
    };
    if rest.is_empty() {
        return;
    }
    let to_pixels = |p: &ScreenPoint| point(px(p.x + origin.x), px(p.y + origin.y));
    let mut builder = PathBuilder::stroke(px(style.width.max(0.5)));
    builder.move_to(to_pixels(first));
    for p in rest {
        builder.line_to(to_pixels(p));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    family: &str,
    position: ScreenPoint,
    text: &str,
    style: &TextStyle,
) {
    if text.is_empty() {
        return;
    }
    let shaped = shape_text(window, family, text, style.size, to_hsla(style.color));
    let line_height = shaped.ascent + shaped.descent;
    let origin = point(px(position.x), px(position.y));
    let _ = shaped.paint(origin, line_height, window, cx);
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
