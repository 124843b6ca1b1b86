//! Plot inputs: function handles, raw values and their classification.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{FigureError, Result};

static FUNCTION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`PlotFn`]; shared by all of its clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionId(u64);

impl FunctionId {
    fn next() -> Self {
        Self(FUNCTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// A shareable `f64 -> f64` function with a stable identity.
#[derive(Clone)]
pub struct PlotFn {
    id: FunctionId,
    func: Arc<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl PlotFn {
    /// Wrap a closure, assigning it a fresh identity.
    pub fn new(func: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            id: FunctionId::next(),
            func: Arc::new(func),
        }
    }

    /// Access the function identity.
    pub fn id(&self) -> FunctionId {
        self.id
    }

    /// Evaluate the function.
    pub fn call(&self, x: f64) -> f64 {
        (self.func)(x)
    }
}

impl std::fmt::Debug for PlotFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PlotFn").field(&self.id).finish()
    }
}

/// Raw value handed to a figure: either two coordinate sequences or a function.
#[derive(Debug, Clone)]
pub enum FigureInput {
    /// X and Y sequences, not yet validated.
    Pairs(Vec<f64>, Vec<f64>),
    /// A function to sample.
    Function(PlotFn),
}

impl FigureInput {
    /// Wrap a closure as a function input.
    pub fn function(func: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Function(PlotFn::new(func))
    }

    /// Build a pair input from anything convertible into `f64` sequences.
    pub fn pairs<X, Y>(xs: X, ys: Y) -> Self
    where
        X: IntoIterator,
        X::Item: Into<f64>,
        Y: IntoIterator,
        Y::Item: Into<f64>,
    {
        Self::Pairs(
            xs.into_iter().map(Into::into).collect(),
            ys.into_iter().map(Into::into).collect(),
        )
    }
}

impl From<PlotFn> for FigureInput {
    fn from(func: PlotFn) -> Self {
        Self::Function(func)
    }
}

/// Something the sampling path can try to evaluate.
#[derive(Debug, Clone)]
pub enum SampleSource {
    /// A real function.
    Callable(PlotFn),
    /// Pairs that failed the shape check; sampling them fails.
    Malformed {
        /// Length of the X sequence.
        xs: usize,
        /// Length of the Y sequence.
        ys: usize,
    },
}

impl SampleSource {
    /// Resolve the callable or report why this source cannot be invoked.
    pub fn callable(&self) -> Result<&PlotFn> {
        match self {
            Self::Callable(func) => Ok(func),
            Self::Malformed { xs, ys } => Err(FigureError::not_invocable(format!(
                "coordinate sequences of length {xs} and {ys} are neither a function nor valid pairs"
            ))),
        }
    }
}

/// Classified plot input.
#[derive(Debug, Clone)]
pub enum PlotInput {
    /// Equal-length, non-empty coordinate sequences.
    CoordinatePairs {
        /// X values.
        xs: Vec<f64>,
        /// Y values.
        ys: Vec<f64>,
    },
    /// A value routed to function sampling.
    SampledFunction(SampleSource),
}

impl PlotInput {
    /// Classify a raw input.
    ///
    /// Pairs of equal, positive length become coordinates. Everything else
    /// goes to the sampling path, which fails later if the value cannot be
    /// invoked. Classification itself never fails.
    pub fn classify(input: FigureInput) -> Self {
        match input {
            FigureInput::Pairs(xs, ys) if xs.len() == ys.len() && !xs.is_empty() => {
                Self::CoordinatePairs { xs, ys }
            }
            FigureInput::Pairs(xs, ys) => Self::SampledFunction(SampleSource::Malformed {
                xs: xs.len(),
                ys: ys.len(),
            }),
            FigureInput::Function(func) => Self::SampledFunction(SampleSource::Callable(func)),
        }
    }
}
