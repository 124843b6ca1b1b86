use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use tracing_subscriber::EnvFilter;

use gpui_figure::{
    AxesConfig, AxisRange, Color, Figure, FigureViewConfig, GpuiFigureView, StrokeStyle, Theme,
};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(720.0), px(560.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let figure = Figure::builder()
                .function(|x| (x * 0.8).sin() * 2.5)
                .x_range(AxisRange::new(-6.0, 6.0, 1.0).expect("x range"))
                .size(560.0, 400.0)
                .num_points(120)
                .stroke(StrokeStyle {
                    color: Color::new(0.2, 0.75, 0.95, 1.0),
                    width: 2.5,
                    opacity: 1.0,
                })
                .axes(AxesConfig::default().with_numbers(true))
                .axis_labels("t", "sin(t)")
                .build()
                .expect("figure");

            let config = FigureViewConfig {
                theme: Theme::dark(),
                ..Default::default()
            };

            let view = GpuiFigureView::with_config(figure, config);
            let handle = view.figure_handle();
            handle.read(|figure| {
                tracing::info!(
                    x_min = figure.viewport().x.min,
                    x_max = figure.viewport().x.max,
                    y_min = figure.viewport().y.min,
                    y_max = figure.viewport().y.max,
                    "fitted viewport"
                );
            });
            cx.new(|_| view)
        })
        .unwrap();
    });
}
