//! Figure themes.

use crate::render::Color;

/// Colors used for everything except the curve stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Background fill.
    pub background: Color,
    /// Axis lines and ticks.
    pub axis: Color,
    /// Tick numbers and axis labels.
    pub text: Color,
}

impl Theme {
    /// Light text on a black background.
    pub fn dark() -> Self {
        Self {
            background: Color::BLACK,
            axis: Color::new(0.85, 0.85, 0.85, 1.0),
            text: Color::WHITE,
        }
    }

    /// Dark text on a white background.
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            axis: Color::new(0.2, 0.2, 0.2, 1.0),
            text: Color::BLACK,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
