//! GPUI integration for gpui_figure.
//!
//! This module provides a GPUI view that renders a
//! [`Figure`](crate::figure::Figure) centered in its bounds. The view only
//! paints; re-plotting goes through a [`FigureHandle`].

mod config;
mod frame;
mod paint;
mod text;
mod view;

pub use config::FigureViewConfig;
pub use view::{FigureHandle, GpuiFigureView};
