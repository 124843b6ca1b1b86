use crate::style::Theme;

/// Configuration for the GPUI figure view.
#[derive(Debug, Clone)]
pub struct FigureViewConfig {
    /// Colors for background, axes and text.
    pub theme: Theme,
    /// Font size for tick numbers and axis labels.
    pub text_size: f32,
    /// Font family for tick numbers and axis labels.
    pub font_family: String,
}

impl Default for FigureViewConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            text_size: 14.0,
            font_family: ".SystemUIFont".to_string(),
        }
    }
}
