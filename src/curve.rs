//! Smooth curve primitive built from canvas points.
//!
//! A [`Curve`] keeps every canvas point it was given, in order, and
//! interpolates them with a natural cubic spline expressed as Bezier
//! segments. Non-finite points split the curve into independent runs.

use crate::geom::ScreenPoint;
use crate::render::Color;

/// Stroke styling for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in logical pixels.
    pub width: f32,
    /// Opacity multiplier in `0.0..=1.0`.
    pub opacity: f32,
}

impl StrokeStyle {
    /// Stroke color with the opacity folded into its alpha channel.
    pub fn effective_color(&self) -> Color {
        let mut color = self.color;
        color.a *= self.opacity.clamp(0.0, 1.0);
        color
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgb_u8(0x36, 0xE1, 0x30),
            width: 3.0,
            opacity: 1.0,
        }
    }
}

/// Cubic Bezier segment in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    /// Segment start, one of the input points.
    pub start: ScreenPoint,
    /// First control point.
    pub ctrl1: ScreenPoint,
    /// Second control point.
    pub ctrl2: ScreenPoint,
    /// Segment end, the next input point.
    pub end: ScreenPoint,
}

impl CubicSegment {
    /// Evaluate the segment at `t` in `0.0..=1.0`.
    pub fn eval(&self, t: f32) -> ScreenPoint {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        ScreenPoint::new(
            a * self.start.x + b * self.ctrl1.x + c * self.ctrl2.x + d * self.end.x,
            a * self.start.y + b * self.ctrl1.y + c * self.ctrl2.y + d * self.end.y,
        )
    }
}

/// A drawable smooth curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<ScreenPoint>,
    runs: Vec<Vec<CubicSegment>>,
    stroke: StrokeStyle,
}

impl Curve {
    /// Build a smooth curve through `points`.
    pub fn smooth(points: Vec<ScreenPoint>, stroke: StrokeStyle) -> Self {
        let runs = points
            .split(|point| !point.is_finite())
            .filter(|run| run.len() > 1)
            .map(spline_segments)
            .collect();
        Self {
            points,
            runs,
            stroke,
        }
    }

    /// The canvas points the curve passes through, in input order.
    pub fn points(&self) -> &[ScreenPoint] {
        &self.points
    }

    /// Connected runs of Bezier segments.
    pub fn runs(&self) -> &[Vec<CubicSegment>] {
        &self.runs
    }

    /// Access the stroke style.
    pub fn stroke(&self) -> StrokeStyle {
        self.stroke
    }

    /// Flatten each run into a polyline with `steps` samples per segment.
    pub fn flatten(&self, steps: usize) -> Vec<Vec<ScreenPoint>> {
        let steps = steps.max(1);
        self.runs
            .iter()
            .map(|run| {
                let mut line = Vec::with_capacity(run.len() * steps + 1);
                if let Some(first) = run.first() {
                    line.push(first.start);
                }
                for segment in run {
                    for i in 1..=steps {
                        line.push(segment.eval(i as f32 / steps as f32));
                    }
                }
                line
            })
            .collect()
    }
}

/// Natural cubic spline through `points` (at least two) as Bezier segments.
fn spline_segments(points: &[ScreenPoint]) -> Vec<CubicSegment> {
    let n = points.len() - 1;
    if n == 1 {
        let (p0, p1) = (points[0], points[1]);
        return vec![CubicSegment {
            start: p0,
            ctrl1: lerp(p0, p1, 1.0 / 3.0),
            ctrl2: lerp(p0, p1, 2.0 / 3.0),
            end: p1,
        }];
    }

    let xs: Vec<f32> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f32> = points.iter().map(|p| p.y).collect();
    let (ax, bx) = control_points(&xs);
    let (ay, by) = control_points(&ys);

    (0..n)
        .map(|i| CubicSegment {
            start: points[i],
            ctrl1: ScreenPoint::new(ax[i], ay[i]),
            ctrl2: ScreenPoint::new(bx[i], by[i]),
            end: points[i + 1],
        })
        .collect()
}

/// First and second control coordinates for each of the `k.len() - 1`
/// segments, from the C2 continuity equations with natural end conditions.
fn control_points(k: &[f32]) -> (Vec<f32>, Vec<f32>) {
    let n = k.len() - 1;
    let mut lower = vec![1.0_f32; n];
    let mut diag = vec![4.0_f32; n];
    let mut upper = vec![1.0_f32; n];
    let mut rhs: Vec<f32> = (0..n).map(|i| 4.0 * k[i] + 2.0 * k[i + 1]).collect();

    lower[0] = 0.0;
    diag[0] = 2.0;
    rhs[0] = k[0] + 2.0 * k[1];
    lower[n - 1] = 2.0;
    diag[n - 1] = 7.0;
    upper[n - 1] = 0.0;
    rhs[n - 1] = 8.0 * k[n - 1] + k[n];

    // Thomas algorithm.
    for i in 1..n {
        let m = lower[i] / diag[i - 1];
        diag[i] -= m * upper[i - 1];
        rhs[i] -= m * rhs[i - 1];
    }
    let mut a = vec![0.0_f32; n];
    a[n - 1] = rhs[n - 1] / diag[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (rhs[i] - upper[i] * a[i + 1]) / diag[i];
    }

    let mut b = vec![0.0_f32; n];
    for i in 0..n - 1 {
        b[i] = 2.0 * k[i + 1] - a[i + 1];
    }
    b[n - 1] = 0.5 * (a[n - 1] + k[n]);
    (a, b)
}

fn lerp(a: ScreenPoint, b: ScreenPoint, t: f32) -> ScreenPoint {
    ScreenPoint::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}
