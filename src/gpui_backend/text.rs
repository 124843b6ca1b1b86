use gpui::{Hsla, ShapedLine, TextRun, Window, font, px};

use crate::render::TextMeasurer;

/// Shape a single line of text in `family` at `size` pixels.
pub(crate) fn shape_text(
    window: &Window,
    family: &str,
    text: &str,
    size: f32,
    color: Hsla,
) -> ShapedLine {
    let run = TextRun {
        len: text.len(),
        font: font(family.to_string()),
        color,
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    window
        .text_system()
        .shape_line(text.to_string().into(), px(size), &[run], None)
}

pub(crate) struct GpuiTextMeasurer<'a> {
    window: &'a Window,
    family: &'a str,
}

impl<'a> GpuiTextMeasurer<'a> {
    pub(crate) fn new(window: &'a Window, family: &'a str) -> Self {
        Self { window, family }
    }
}

impl TextMeasurer for GpuiTextMeasurer<'_> {
    fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let shaped = shape_text(self.window, self.family, text, size, gpui::black());
        let height = f32::from(shaped.ascent + shaped.descent);
        (f32::from(shaped.width), height.max(size * 1.2))
    }
}
