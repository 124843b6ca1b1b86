//! Figure: axes fitted to a function or coordinate data, plus its curve.
//!
//! A figure is built once from a [`FigureInput`] and a [`FigureConfig`].
//! Construction classifies the input, fits or accepts the viewport, and
//! plots the initial curve. Afterwards only the curve and the axis labels
//! change; the viewport is fixed for the lifetime of the figure.

use tracing::debug;

use crate::axes::{Axes, AxisLabels};
use crate::axis::AxesConfig;
use crate::curve::{Curve, StrokeStyle};
use crate::error::{FigureError, Result};
use crate::fit::{FitMode, fit_axes};
use crate::input::{FigureInput, PlotFn, PlotInput, SampleSource};
use crate::sampling::{SampleCache, SampleKey, SampleSet, sample_function};
use crate::scene::{Entity, EntityId, Group};
use crate::view::{AxisRange, DEFAULT_X_RANGE, DEFAULT_Y_RANGE, Viewport};

/// Extra distance between an axis label and its axis, in pixels.
pub const LABEL_PADDING: f32 = 12.0;

/// Leftward shift of the y label so it clears the y axis numbers, in pixels.
pub const Y_LABEL_INSET: f32 = 48.0;

/// Construction options for a [`Figure`].
#[derive(Debug, Clone)]
pub struct FigureConfig {
    /// X range used when not auto-fitting; also the sampling domain.
    pub x_range: AxisRange,
    /// Y range used when not auto-fitting.
    pub y_range: AxisRange,
    /// Canvas width in logical pixels.
    pub width: f32,
    /// Canvas height in logical pixels.
    pub height: f32,
    /// Keep out-of-range samples when not auto-fitting.
    pub allow_clip: bool,
    /// Stroke for the initial curve.
    pub stroke: StrokeStyle,
    /// Derive the viewport from the data extents.
    pub fit_axes_to_curve: bool,
    /// Optional `(x, y)` axis label text.
    pub axis_labels: Option<(String, String)>,
    /// Sample count for function inputs.
    pub num_points: usize,
    /// Tick steps `(x, y)` used when auto-fitting.
    pub tick_freq: (f64, f64),
    /// Axis display configuration.
    pub axes: AxesConfig,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            x_range: DEFAULT_X_RANGE,
            y_range: DEFAULT_Y_RANGE,
            width: 400.0,
            height: 400.0,
            allow_clip: false,
            stroke: StrokeStyle::default(),
            fit_axes_to_curve: true,
            axis_labels: None,
            num_points: 100,
            tick_freq: (1.0, 1.0),
            axes: AxesConfig::default(),
        }
    }
}

/// Lifecycle state of a built figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureState {
    /// Axes exist but no curve has been plotted.
    ViewportReady,
    /// A primary curve is attached.
    Plotted,
}

/// Axes plus an optional primary curve and axis labels.
#[derive(Debug)]
pub struct Figure {
    axes: Axes,
    domain: AxisRange,
    group: Group,
    curve: Option<EntityId>,
    labels: Option<EntityId>,
    cache: SampleCache,
}

impl Figure {
    /// Build a figure from an input and configuration.
    ///
    /// Fails with [`FigureError::InvalidInput`] when `input` is `None`.
    pub fn new(input: Option<FigureInput>, config: FigureConfig) -> Result<Self> {
        let input = input.ok_or(FigureError::InvalidInput)?;
        let explicit = FitMode::Explicit {
            x: config.x_range,
            y: config.y_range,
        };
        let auto = FitMode::AutoFit {
            tick_x: config.tick_freq.0,
            tick_y: config.tick_freq.1,
        };

        let mut figure = match PlotInput::classify(input) {
            PlotInput::CoordinatePairs { xs, ys } => {
                debug!(len = xs.len(), fit = config.fit_axes_to_curve, "figure from coordinates");
                let mode = if config.fit_axes_to_curve { auto } else { explicit };
                let mut figure = Self::assemble(mode, &xs, &ys, &config)?;
                figure.plot_from_coords(&xs, &ys, config.stroke)?;
                figure
            }
            PlotInput::SampledFunction(source) if config.fit_axes_to_curve => {
                debug!(num_points = config.num_points, "figure from function, auto-fit");
                let func = source.callable()?;
                let domain = validated(config.x_range)?;
                let samples = sample_function(func, &domain, None, config.num_points);
                let mut figure = Self::assemble(auto, &samples.xs, &samples.ys, &config)?;
                // Padding a degenerate x extent moves the sampling domain.
                let fitted = figure.viewport().x;
                if (fitted.min, fitted.max) == (domain.min, domain.max) {
                    figure
                        .cache
                        .insert(SampleKey::new(func, true, config.num_points), samples);
                }
                figure.plot_from_func(func, true, config.num_points, config.stroke)?;
                figure
            }
            PlotInput::SampledFunction(source) => {
                debug!(
                    num_points = config.num_points,
                    allow_clip = config.allow_clip,
                    "figure from function"
                );
                let mut figure = Self::assemble(explicit, &[], &[], &config)?;
                let func = source.callable()?;
                figure.plot_from_func(func, config.allow_clip, config.num_points, config.stroke)?;
                figure
            }
        };

        if let Some((x_label, y_label)) = config.axis_labels {
            figure.add_axis_labels(x_label, y_label);
        }
        Ok(figure)
    }

    /// Start building a figure.
    pub fn builder() -> FigureBuilder {
        FigureBuilder::default()
    }

    fn assemble(
        mode: FitMode,
        xs: &[f64],
        ys: &[f64],
        config: &FigureConfig,
    ) -> Result<Self> {
        let (x, y) = fit_axes(mode, xs, ys)?;
        let viewport = Viewport::new(x, y, config.width, config.height)?;
        Ok(Self {
            axes: Axes::new(viewport, config.axes.clone()),
            domain: config.x_range,
            group: Group::new(),
            curve: None,
            labels: None,
            cache: SampleCache::new(),
        })
    }

    /// Access the axes.
    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    /// Access the viewport.
    pub fn viewport(&self) -> &Viewport {
        self.axes.viewport()
    }

    /// The caller-supplied x range the figure was configured with.
    pub fn domain(&self) -> &AxisRange {
        &self.domain
    }

    /// Entities drawn on top of the axes.
    pub fn group(&self) -> &Group {
        &self.group
    }

    /// Current lifecycle state.
    pub fn state(&self) -> FigureState {
        if self.curve.is_some() {
            FigureState::Plotted
        } else {
            FigureState::ViewportReady
        }
    }

    /// The primary curve, if one is plotted.
    pub fn curve(&self) -> Option<&Curve> {
        match self.group.get(self.curve?)? {
            Entity::Curve(curve) => Some(curve),
            Entity::Labels(_) => None,
        }
    }

    /// The attached axis labels.
    pub fn labels(&self) -> Option<&AxisLabels> {
        match self.group.get(self.labels?)? {
            Entity::Labels(labels) => Some(labels),
            Entity::Curve(_) => None,
        }
    }

    /// Sample `func` over the viewport's x range.
    ///
    /// Without `allow_clip`, samples outside the viewport's y range or not a
    /// number are dropped. Results are memoized per figure.
    pub fn sample(&mut self, func: &PlotFn, allow_clip: bool, num_points: usize) -> SampleSet {
        let viewport = *self.axes.viewport();
        self.cache
            .get_or_insert_with(SampleKey::new(func, allow_clip, num_points), || {
                let clip_to = (!allow_clip).then_some(&viewport.y);
                sample_function(func, &viewport.x, clip_to, num_points)
            })
    }

    /// Sample a classified source, failing if it cannot be invoked.
    pub fn sample_source(
        &mut self,
        source: &SampleSource,
        allow_clip: bool,
        num_points: usize,
    ) -> Result<SampleSet> {
        let func = source.callable()?;
        Ok(self.sample(func, allow_clip, num_points))
    }

    /// Sample `func` and plot the result, replacing the current curve.
    ///
    /// Does nothing when every sample is clipped away.
    pub fn plot_from_func(
        &mut self,
        func: &PlotFn,
        allow_clip: bool,
        num_points: usize,
        stroke: StrokeStyle,
    ) -> Result<()> {
        let samples = self.sample(func, allow_clip, num_points);
        if samples.is_empty() {
            debug!(num_points, "all samples clipped, nothing to plot");
            return Ok(());
        }
        self.plot_from_coords(&samples.xs, &samples.ys, stroke)
    }

    /// Plot coordinate pairs as a smooth curve, replacing the current curve.
    ///
    /// Does nothing if either sequence is empty.
    pub fn plot_from_coords(&mut self, xs: &[f64], ys: &[f64], stroke: StrokeStyle) -> Result<()> {
        if xs.is_empty() || ys.is_empty() {
            return Ok(());
        }
        let points = self.axes.data_to_canvas(xs, ys)?;
        let curve = Curve::smooth(points, stroke);
        if let Some(previous) = self.curve.take() {
            self.group.remove(previous);
        }
        self.curve = Some(self.group.add(Entity::Curve(curve)));
        debug!(points = xs.len(), "plotted curve");
        Ok(())
    }

    /// Attach axis labels, replacing any existing pair.
    pub fn add_axis_labels(&mut self, x_label: impl Into<String>, y_label: impl Into<String>) {
        let labels = AxisLabels {
            x: self.axes.x_axis_label(x_label).shifted(LABEL_PADDING, 0.0),
            y: self
                .axes
                .y_axis_label(y_label)
                .shifted(-Y_LABEL_INSET, -LABEL_PADDING),
        };
        self.remove_axis_labels();
        self.labels = Some(self.group.add(Entity::Labels(labels)));
    }

    /// Detach the axis labels, if any.
    pub fn remove_axis_labels(&mut self) {
        if let Some(labels) = self.labels.take() {
            self.group.remove(labels);
        }
    }
}

fn validated(range: AxisRange) -> Result<AxisRange> {
    AxisRange::new(range.min, range.max, range.tick_step)
}

/// Builder for configuring a figure before construction.
#[derive(Debug, Default)]
pub struct FigureBuilder {
    input: Option<FigureInput>,
    config: FigureConfig,
}

impl FigureBuilder {
    /// Set the raw input.
    pub fn input(mut self, input: FigureInput) -> Self {
        self.input = Some(input);
        self
    }

    /// Plot a function.
    pub fn function(self, func: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.input(FigureInput::function(func))
    }

    /// Plot coordinate pairs.
    pub fn coordinates(self, xs: Vec<f64>, ys: Vec<f64>) -> Self {
        self.input(FigureInput::Pairs(xs, ys))
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: FigureConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the x range (and sampling domain).
    pub fn x_range(mut self, range: AxisRange) -> Self {
        self.config.x_range = range;
        self
    }

    /// Set the y range.
    pub fn y_range(mut self, range: AxisRange) -> Self {
        self.config.y_range = range;
        self
    }

    /// Set the canvas size in logical pixels.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Keep or mask out-of-range samples.
    pub fn allow_clip(mut self, allow: bool) -> Self {
        self.config.allow_clip = allow;
        self
    }

    /// Set the curve stroke.
    pub fn stroke(mut self, stroke: StrokeStyle) -> Self {
        self.config.stroke = stroke;
        self
    }

    /// Fit the axes to the data extents.
    pub fn fit_axes_to_curve(mut self, fit: bool) -> Self {
        self.config.fit_axes_to_curve = fit;
        self
    }

    /// Attach axis labels on construction.
    pub fn axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.config.axis_labels = Some((x.into(), y.into()));
        self
    }

    /// Set the sample count for function inputs.
    pub fn num_points(mut self, num_points: usize) -> Self {
        self.config.num_points = num_points;
        self
    }

    /// Set the tick steps used when auto-fitting.
    pub fn tick_freq(mut self, x: f64, y: f64) -> Self {
        self.config.tick_freq = (x, y);
        self
    }

    /// Set the axis display configuration.
    pub fn axes(mut self, axes: AxesConfig) -> Self {
        self.config.axes = axes;
        self
    }

    /// Build the figure.
    pub fn build(self) -> Result<Figure> {
        Figure::new(self.input, self.config)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn range(min: f64, max: f64, step: f64) -> AxisRange {
        AxisRange::new(min, max, step).unwrap()
    }

    #[test]
    fn coordinate_pairs_fit_tightly() {
        let figure = Figure::builder()
            .coordinates(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0])
            .build()
            .unwrap();
        assert_eq!(figure.viewport().x, range(0.0, 2.0, 1.0));
        assert_eq!(figure.viewport().y, range(0.0, 4.0, 1.0));
        assert_eq!(figure.curve().unwrap().points().len(), 3);
        assert_eq!(figure.state(), FigureState::Plotted);
    }

    #[test]
    fn function_auto_fit_uses_unclipped_extents() {
        let mut figure = Figure::builder()
            .function(|x| x * x)
            .x_range(range(-1.0, 1.0, 1.0))
            .num_points(5)
            .allow_clip(true)
            .build()
            .unwrap();
        assert_eq!(figure.viewport().x, range(-1.0, 1.0, 1.0));
        assert_eq!(figure.viewport().y, range(0.0, 1.0, 1.0));
        assert_eq!(figure.curve().unwrap().points().len(), 5);

        let func = PlotFn::new(|x| x * x);
        let samples = figure.sample(&func, true, 5);
        assert_eq!(samples.xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(samples.ys, vec![1.0, 0.25, 0.0, 0.25, 1.0]);
    }

    #[test]
    fn auto_fit_samples_function_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let figure = Figure::builder()
            .function(move |x| {
                counter.fetch_add(1, Ordering::Relaxed);
                x.sin()
            })
            .num_points(50)
            .build()
            .unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 50);
        assert_eq!(figure.cache.len(), 1);
        let viewport = figure.viewport();
        assert_eq!((viewport.x.min, viewport.x.max), (-8.0, 8.0));
        assert!(viewport.y.min >= -1.0 && viewport.y.max <= 1.0);
    }

    #[test]
    fn explicit_range_clips_out_of_range_samples() {
        let mut figure = Figure::builder()
            .function(|x| 1.0 / x)
            .fit_axes_to_curve(false)
            .x_range(range(-1.0, 1.0, 1.0))
            .y_range(range(-5.0, 5.0, 1.0))
            .allow_clip(false)
            .num_points(101)
            .build()
            .unwrap();
        let plotted = figure.curve().unwrap().points().len();
        assert!(plotted < 101);

        let func = PlotFn::new(|x| 1.0 / x);
        let samples = figure.sample(&func, false, 101);
        assert_eq!(samples.len(), plotted);
        assert!(samples.ys.iter().all(|y| (-5.0..=5.0).contains(y)));
    }

    #[test]
    fn missing_input_is_rejected() {
        let err = Figure::new(None, FigureConfig::default()).unwrap_err();
        assert_eq!(err, FigureError::InvalidInput);
        assert!(matches!(
            Figure::builder().build(),
            Err(FigureError::InvalidInput)
        ));
    }

    #[test]
    fn malformed_pairs_fail_when_sampled() {
        let err = Figure::builder()
            .coordinates(vec![0.0, 1.0], vec![0.0])
            .build()
            .unwrap_err();
        assert!(matches!(err, FigureError::NotInvocable { .. }));

        let err = Figure::builder()
            .coordinates(vec![0.0, 1.0], vec![0.0])
            .fit_axes_to_curve(false)
            .build()
            .unwrap_err();
        assert!(matches!(err, FigureError::NotInvocable { .. }));
    }

    #[test]
    fn fully_clipped_function_leaves_viewport_without_curve() {
        let figure = Figure::builder()
            .function(|_| 100.0)
            .fit_axes_to_curve(false)
            .build()
            .unwrap();
        assert!(figure.curve().is_none());
        assert_eq!(figure.state(), FigureState::ViewportReady);
    }

    #[test]
    fn empty_coordinates_are_a_no_op() {
        let mut figure = Figure::builder()
            .coordinates(vec![0.0, 1.0], vec![0.0, 1.0])
            .build()
            .unwrap();
        let before = figure.curve().cloned();
        figure
            .plot_from_coords(&[], &[1.0], StrokeStyle::default())
            .unwrap();
        figure
            .plot_from_coords(&[1.0], &[], StrokeStyle::default())
            .unwrap();
        assert_eq!(figure.curve().cloned(), before);
    }

    #[test]
    fn mismatched_coordinates_are_rejected() {
        let mut figure = Figure::builder()
            .coordinates(vec![0.0, 1.0], vec![0.0, 1.0])
            .build()
            .unwrap();
        let err = figure
            .plot_from_coords(&[0.0, 1.0], &[0.0], StrokeStyle::default())
            .unwrap_err();
        assert_eq!(err, FigureError::LengthMismatch { xs: 2, ys: 1 });
    }

    #[test]
    fn replotting_replaces_the_curve() {
        let mut figure = Figure::builder()
            .coordinates(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0])
            .build()
            .unwrap();
        figure
            .plot_from_coords(&[0.0, 2.0], &[4.0, 0.0], StrokeStyle::default())
            .unwrap();
        let curves = figure
            .group()
            .iter()
            .filter(|entity| matches!(entity, Entity::Curve(_)))
            .count();
        assert_eq!(curves, 1);
        assert_eq!(figure.curve().unwrap().points().len(), 2);
    }

    #[test]
    fn plotted_points_keep_input_order() {
        let xs = vec![0.0, 2.0, 1.0, 1.0];
        let ys = vec![0.0, 4.0, 1.0, 1.0];
        let figure = Figure::builder()
            .coordinates(xs.clone(), ys.clone())
            .build()
            .unwrap();
        let points = figure.curve().unwrap().points().to_vec();
        let expected = figure.axes().data_to_canvas(&xs, &ys).unwrap();
        assert_eq!(points, expected);
    }

    #[test]
    fn sampling_is_memoized() {
        let mut figure = Figure::builder()
            .coordinates(vec![-2.0, 2.0], vec![-2.0, 2.0])
            .build()
            .unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let func = PlotFn::new(move |x| {
            counter.fetch_add(1, Ordering::Relaxed);
            x * 3.0
        });
        let first = figure.sample(&func, false, 20);
        let second = figure.sample(&func, false, 20);
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::Relaxed), 20);
        assert!(first.ys.iter().all(|y| figure.viewport().y.contains(*y)));
    }

    #[test]
    fn labels_attach_and_detach_idempotently() {
        let mut figure = Figure::builder()
            .coordinates(vec![0.0, 1.0], vec![0.0, 1.0])
            .axis_labels("t", "v")
            .build()
            .unwrap();
        let labels = figure.labels().unwrap();
        assert_eq!(labels.x.text, "t");
        assert_eq!(labels.y.text, "v");

        figure.remove_axis_labels();
        assert!(figure.labels().is_none());
        figure.remove_axis_labels();
        assert!(figure.labels().is_none());
        assert!(figure.curve().is_some());
        assert_eq!(figure.group().len(), 1);
    }

    #[test]
    fn labels_are_padded_away_from_axes() {
        let mut figure = Figure::builder()
            .coordinates(vec![0.0, 1.0], vec![0.0, 1.0])
            .build()
            .unwrap();
        figure.add_axis_labels("x", "y");
        let bare_x = figure.axes().x_axis_label("x");
        let bare_y = figure.axes().y_axis_label("y");
        let labels = figure.labels().unwrap();
        assert_eq!(labels.x.position.x, bare_x.position.x + LABEL_PADDING);
        assert_eq!(labels.y.position.y, bare_y.position.y - LABEL_PADDING);
        assert_eq!(labels.y.position.x, bare_y.position.x - Y_LABEL_INSET);
        let (_, y_axis_top) = figure.axes().y_axis_line();
        assert!(labels.y.position.x < y_axis_top.x);
    }

    #[test]
    fn single_sample_auto_fit_caches_the_fitted_domain() {
        let square = PlotFn::new(|x| x * x);
        let mut figure = Figure::builder()
            .input(square.clone().into())
            .num_points(1)
            .build()
            .unwrap();
        let x = figure.viewport().x;
        assert_eq!((x.min, x.max), (-8.5, -7.5));

        let cached = figure.sample(&square, true, 1);
        let fresh = figure.sample(&PlotFn::new(|x| x * x), true, 1);
        assert_eq!(cached, fresh);
        assert_eq!(cached.xs, vec![-8.5]);
        assert_eq!(cached.ys, vec![72.25]);
    }

    #[test]
    fn invalid_caller_range_is_rejected() {
        let err = Figure::builder()
            .function(|x| x)
            .x_range(AxisRange {
                min: 1.0,
                max: -1.0,
                tick_step: 1.0,
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, FigureError::InvalidRange { .. }));
    }
}
