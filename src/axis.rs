//! Per-axis display configuration and tick number formatting.

use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;

/// Direction from an axis line toward its tick numbers, in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the top of the canvas.
    Up,
    /// Toward the bottom of the canvas.
    Down,
    /// Toward the left edge.
    Left,
    /// Toward the right edge.
    Right,
}

impl Direction {
    /// Unit vector in canvas space (y grows downward).
    pub fn unit(self) -> (f32, f32) {
        match self {
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }
}

/// Formatter for tick numbers.
#[derive(Clone, Default)]
pub enum AxisFormatter {
    /// Up to two decimals with trailing zeros removed.
    #[default]
    Default,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => {
                let text = format!("{value:.2}");
                let text = text.trim_end_matches('0').trim_end_matches('.');
                match text {
                    "-0" => "0".to_string(),
                    other => other.to_string(),
                }
            }
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "AxisFormatter::Default"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}

/// Display configuration for a single axis.
#[derive(Debug, Clone)]
pub struct AxisConfig {
    include_numbers: bool,
    number_direction: Direction,
    number_orientation: f64,
    formatter: AxisFormatter,
}

impl AxisConfig {
    /// Create an axis configuration placing numbers in `number_direction`.
    pub fn new(number_direction: Direction) -> Self {
        Self {
            include_numbers: false,
            number_direction,
            number_orientation: 0.0,
            formatter: AxisFormatter::default(),
        }
    }

    /// Toggle tick numbering.
    pub fn with_numbers(mut self, include: bool) -> Self {
        self.include_numbers = include;
        self
    }

    /// Set which side of the axis line the numbers sit on.
    pub fn with_number_direction(mut self, direction: Direction) -> Self {
        self.number_direction = direction;
        self
    }

    /// Set the number rotation in radians.
    pub fn with_number_orientation(mut self, radians: f64) -> Self {
        self.number_orientation = radians;
        self
    }

    /// Set the number formatter.
    pub fn with_formatter(mut self, formatter: AxisFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Whether tick numbers are drawn.
    pub fn include_numbers(&self) -> bool {
        self.include_numbers
    }

    /// Side of the axis line the numbers sit on.
    pub fn number_direction(&self) -> Direction {
        self.number_direction
    }

    /// Number rotation in radians.
    pub fn number_orientation(&self) -> f64 {
        self.number_orientation
    }

    /// Access the formatter.
    pub fn formatter(&self) -> &AxisFormatter {
        &self.formatter
    }
}

/// Display configuration for both axes of a figure.
#[derive(Debug, Clone)]
pub struct AxesConfig {
    /// Horizontal axis.
    pub x: AxisConfig,
    /// Vertical axis.
    pub y: AxisConfig,
}

impl AxesConfig {
    /// Toggle tick numbering on both axes.
    pub fn with_numbers(mut self, include: bool) -> Self {
        self.x = self.x.with_numbers(include);
        self.y = self.y.with_numbers(include);
        self
    }
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            x: AxisConfig::new(Direction::Down),
            y: AxisConfig::new(Direction::Up).with_number_orientation(-FRAC_PI_2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_formatter_trims_zeros() {
        let formatter = AxisFormatter::default();
        assert_eq!(formatter.format(2.0), "2");
        assert_eq!(formatter.format(0.5), "0.5");
        assert_eq!(formatter.format(-0.0), "0");
        assert_eq!(formatter.format(1.257), "1.26");
    }

    #[test]
    fn default_axes_hide_numbers() {
        let config = AxesConfig::default();
        assert!(!config.x.include_numbers());
        assert!(!config.y.include_numbers());
        assert_eq!(config.y.number_direction(), Direction::Up);
        assert!(config.with_numbers(true).y.include_numbers());
    }
}
