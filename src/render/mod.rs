//! Rendering primitives and figure-to-command translation.
//!
//! These types are backend-agnostic and are used by render backends (such as
//! the GPUI backend) to describe how a figure should be drawn. All positions
//! are in the figure's canvas space.

use crate::axes::{Axes, Label, Tick};
use crate::axis::AxisConfig;
use crate::curve::Curve;
use crate::figure::Figure;
use crate::geom::ScreenPoint;
use crate::scene::Entity;
use crate::style::Theme;

/// Samples per Bezier segment when flattening curves.
pub const CURVE_FLATTEN_STEPS: usize = 8;
/// Length of a tick mark in pixels.
pub const TICK_LENGTH: f32 = 8.0;
/// Gap between a tick and its number in pixels.
pub const NUMBER_BUFF: f32 = 4.0;
/// Stroke width of the axis lines.
pub const AXIS_WIDTH: f32 = 2.0;

/// RGBA color.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::from_rgb_u8(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
        }
    }
}

/// Text measurement provided by the backend.
pub trait TextMeasurer {
    /// Width and height of `text` at font `size`.
    fn measure(&self, text: &str, size: f32) -> (f32, f32);
}

/// A single draw operation.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Connected line through the points.
    Polyline {
        /// Points in draw order.
        points: Vec<ScreenPoint>,
        /// Stroke styling.
        style: LineStyle,
    },
    /// Draw text.
    Text {
        /// Top-left corner of the text.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
        /// Requested rotation in radians.
        rotation: f32,
    },
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }
}

/// Build the render commands for a figure: axes first, then its entities in
/// draw order.
pub fn build_figure(
    figure: &Figure,
    theme: &Theme,
    text_size: f32,
    measurer: &dyn TextMeasurer,
) -> RenderList {
    let mut render = RenderList::new();
    build_axes(&mut render, figure.axes(), theme, text_size, measurer);
    for entity in figure.group().iter() {
        match entity {
            Entity::Curve(curve) => build_curve(&mut render, curve),
            Entity::Labels(labels) => {
                for label in [&labels.x, &labels.y] {
                    build_label(&mut render, label, theme, text_size, measurer);
                }
            }
        }
    }
    render
}

fn build_axes(
    render: &mut RenderList,
    axes: &Axes,
    theme: &Theme,
    text_size: f32,
    measurer: &dyn TextMeasurer,
) {
    let style = LineStyle {
        color: theme.axis,
        width: AXIS_WIDTH,
    };
    for (start, end) in [axes.x_axis_line(), axes.y_axis_line()] {
        render.push(RenderCommand::Polyline {
            points: vec![start, end],
            style,
        });
    }

    let half = TICK_LENGTH * 0.5;
    let config = axes.config();
    for (ticks, axis, vertical) in [
        (axes.x_ticks(), &config.x, true),
        (axes.y_ticks(), &config.y, false),
    ] {
        for tick in ticks {
            let p = tick.position;
            let points = if vertical {
                vec![p.offset(0.0, -half), p.offset(0.0, half)]
            } else {
                vec![p.offset(-half, 0.0), p.offset(half, 0.0)]
            };
            render.push(RenderCommand::Polyline { points, style });
            if axis.include_numbers() {
                build_number(render, &tick, axis, theme, text_size, measurer);
            }
        }
    }
}

fn build_number(
    render: &mut RenderList,
    tick: &Tick,
    axis: &AxisConfig,
    theme: &Theme,
    text_size: f32,
    measurer: &dyn TextMeasurer,
) {
    let text = axis.formatter().format(tick.value);
    let (width, height) = measurer.measure(&text, text_size);
    let (dx, dy) = axis.number_direction().unit();
    let reach = NUMBER_BUFF + TICK_LENGTH * 0.5;
    let center = tick.position.offset(
        dx * (reach + width * 0.5),
        dy * (reach + height * 0.5),
    );
    render.push(RenderCommand::Text {
        position: center.offset(-width * 0.5, -height * 0.5),
        text,
        style: TextStyle {
            color: theme.text,
            size: text_size,
        },
        rotation: axis.number_orientation() as f32,
    });
}

fn build_curve(render: &mut RenderList, curve: &Curve) {
    let stroke = curve.stroke();
    let style = LineStyle {
        color: stroke.effective_color(),
        width: stroke.width,
    };
    for points in curve.flatten(CURVE_FLATTEN_STEPS) {
        render.push(RenderCommand::Polyline { points, style });
    }
}

fn build_label(
    render: &mut RenderList,
    label: &Label,
    theme: &Theme,
    text_size: f32,
    measurer: &dyn TextMeasurer,
) {
    let (_, height) = measurer.measure(&label.text, text_size);
    render.push(RenderCommand::Text {
        position: label.position.offset(0.0, -height),
        text: label.text.clone(),
        style: TextStyle {
            color: theme.text,
            size: text_size,
        },
        rotation: 0.0,
    });
}
