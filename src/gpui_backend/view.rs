use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{Window, canvas, div};

use crate::figure::Figure;

use super::config::FigureViewConfig;
use super::frame::build_frame;
use super::paint::{paint_frame, to_hsla};

/// A GPUI view that renders a [`Figure`] centered in its bounds.
#[derive(Clone)]
pub struct GpuiFigureView {
    figure: Arc<RwLock<Figure>>,
    config: FigureViewConfig,
}

impl GpuiFigureView {
    /// Create a new GPUI figure view.
    ///
    /// Uses the default [`FigureViewConfig`].
    pub fn new(figure: Figure) -> Self {
        Self::with_config(figure, FigureViewConfig::default())
    }

    /// Create a new GPUI figure view with a custom configuration.
    pub fn with_config(figure: Figure, config: FigureViewConfig) -> Self {
        Self {
            figure: Arc::new(RwLock::new(figure)),
            config,
        }
    }

    /// Get a handle for re-plotting or relabeling the underlying figure.
    pub fn figure_handle(&self) -> FigureHandle {
        FigureHandle {
            figure: Arc::clone(&self.figure),
        }
    }
}

impl Render for GpuiFigureView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let figure = Arc::clone(&self.figure);
        let config = self.config.clone();
        let background = to_hsla(config.theme.background);

        div().size_full().bg(background).child(
            canvas(
                move |bounds, window, _| {
                    let figure = figure.read().expect("figure lock");
                    build_frame(&figure, &config, bounds, window)
                },
                move |_, frame, window, cx| {
                    paint_frame(&frame, window, cx);
                },
            )
            .size_full(),
        )
    }
}

/// A handle for mutating a [`Figure`] held inside a `GpuiFigureView`.
///
/// The handle clones cheaply and can be moved into async tasks. Call
/// `cx.notify()` on the view after writing to repaint.
#[derive(Clone)]
pub struct FigureHandle {
    figure: Arc<RwLock<Figure>>,
}

impl FigureHandle {
    /// Read the figure.
    ///
    /// The figure is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&Figure) -> R) -> R {
        let figure = self.figure.read().expect("figure lock");
        f(&figure)
    }

    /// Mutate the figure.
    ///
    /// The figure is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut Figure) -> R) -> R {
        let mut figure = self.figure.write().expect("figure lock");
        f(&mut figure)
    }
}
