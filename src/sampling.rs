//! Function sampling, clipping and the per-figure sample cache.

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use crate::input::{FunctionId, PlotFn};
use crate::view::AxisRange;

/// Order-aligned x/y values, either sampled or supplied directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    /// X values.
    pub xs: Vec<f64>,
    /// Y values, one per x.
    pub ys: Vec<f64>,
}

impl SampleSet {
    /// Create an empty sample set with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Check whether the set holds no samples.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    fn push(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }
}

/// `count` evenly spaced values from `range.min` to `range.max`, inclusive.
pub fn linspace(range: &AxisRange, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![range.min],
        _ => {
            let step = range.span() / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| range.min + step * i as f64).collect();
            values[count - 1] = range.max;
            values
        }
    }
}

/// Sample `func` over `x_range`.
///
/// With `clip_to` set, samples whose value is non-numeric or outside the
/// inclusive range are dropped; retained samples keep their order.
pub fn sample_function(
    func: &PlotFn,
    x_range: &AxisRange,
    clip_to: Option<&AxisRange>,
    num_points: usize,
) -> SampleSet {
    let xs = linspace(x_range, num_points);
    let mut samples = SampleSet::with_capacity(xs.len());
    for x in xs {
        let y = func.call(x);
        match clip_to {
            Some(y_range) if !y_range.contains(y) => {}
            _ => samples.push(x, y),
        }
    }
    samples
}

/// Cache key for a sampling request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleKey {
    /// Function identity.
    pub func: FunctionId,
    /// Whether out-of-range samples are kept.
    pub allow_clip: bool,
    /// Requested sample count.
    pub num_points: usize,
}

impl SampleKey {
    /// Build the key for sampling `func`.
    pub fn new(func: &PlotFn, allow_clip: bool, num_points: usize) -> Self {
        Self {
            func: func.id(),
            allow_clip,
            num_points,
        }
    }
}

/// Upper bound on cached sample sets per figure.
pub const MAX_CACHE_ENTRIES: usize = 32;

/// Memoized sample sets owned by a single figure.
///
/// A figure's ranges never change after construction, so entries never go
/// stale. The cache holds at most [`MAX_CACHE_ENTRIES`] sets; the oldest
/// entry is evicted first and is recomputed if requested again.
#[derive(Debug, Default)]
pub struct SampleCache {
    entries: HashMap<SampleKey, SampleSet>,
    order: VecDeque<SampleKey>,
}

impl SampleCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached set for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with(
        &mut self,
        key: SampleKey,
        compute: impl FnOnce() -> SampleSet,
    ) -> SampleSet {
        if let Some(samples) = self.entries.get(&key) {
            trace!(?key, "sample cache hit");
            return samples.clone();
        }
        let samples = compute();
        trace!(?key, len = samples.len(), "sample cache miss");
        self.insert(key, samples.clone());
        samples
    }

    /// Store a set computed elsewhere, replacing any entry for `key`.
    pub fn insert(&mut self, key: SampleKey, samples: SampleSet) {
        if self.entries.insert(key, samples).is_some() {
            return;
        }
        self.order.push_back(key);
        while self.order.len() > MAX_CACHE_ENTRIES {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                trace!(key = ?oldest, "sample cache evict");
            }
        }
    }

    /// Check whether `key` is cached.
    pub fn contains(&self, key: &SampleKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn range(min: f64, max: f64) -> AxisRange {
        AxisRange::new(min, max, 1.0).unwrap()
    }

    #[test]
    fn linspace_is_inclusive() {
        assert_eq!(
            linspace(&range(-1.0, 1.0), 5),
            vec![-1.0, -0.5, 0.0, 0.5, 1.0]
        );
        assert_eq!(linspace(&range(-1.0, 1.0), 1), vec![-1.0]);
        assert!(linspace(&range(-1.0, 1.0), 0).is_empty());
    }

    #[test]
    fn unclipped_sampling_keeps_every_value() {
        let square = PlotFn::new(|x| x * x);
        let samples = sample_function(&square, &range(-1.0, 1.0), None, 5);
        assert_eq!(samples.xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(samples.ys, vec![1.0, 0.25, 0.0, 0.25, 1.0]);
    }

    #[test]
    fn clipping_drops_out_of_range_and_nan() {
        let func = PlotFn::new(|x| if x == 0.0 { f64::NAN } else { 1.0 / x });
        let y_range = AxisRange::new(-5.0, 5.0, 1.0).unwrap();
        let samples = sample_function(&func, &range(-1.0, 1.0), Some(&y_range), 101);
        assert!(samples.len() < 101);
        assert_eq!(samples.xs.len(), samples.ys.len());
        assert!(samples.ys.iter().all(|y| y_range.contains(*y)));
        assert!(samples.xs.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn cache_returns_equal_results_without_resampling() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let func = PlotFn::new(move |x| {
            counter.fetch_add(1, Ordering::Relaxed);
            x + 1.0
        });
        let mut cache = SampleCache::new();
        let key = SampleKey::new(&func, true, 10);
        let first =
            cache.get_or_insert_with(key, || sample_function(&func, &range(0.0, 1.0), None, 10));
        let second =
            cache.get_or_insert_with(key, || sample_function(&func, &range(0.0, 1.0), None, 10));
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::Relaxed), 10);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_evicts_oldest_entry_when_full() {
        let mut cache = SampleCache::new();
        let funcs: Vec<PlotFn> = (0..=MAX_CACHE_ENTRIES)
            .map(|i| PlotFn::new(move |x| x + i as f64))
            .collect();
        for func in &funcs {
            cache.get_or_insert_with(SampleKey::new(func, true, 3), || {
                sample_function(func, &range(0.0, 1.0), None, 3)
            });
        }
        assert_eq!(cache.len(), MAX_CACHE_ENTRIES);
        assert!(!cache.contains(&SampleKey::new(&funcs[0], true, 3)));
        assert!(cache.contains(&SampleKey::new(&funcs[1], true, 3)));
        assert!(cache.contains(&SampleKey::new(&funcs[MAX_CACHE_ENTRIES], true, 3)));
    }

    #[test]
    fn cache_keys_separate_clip_and_density() {
        let func = PlotFn::new(|x| x);
        assert_ne!(SampleKey::new(&func, true, 10), SampleKey::new(&func, false, 10));
        assert_ne!(SampleKey::new(&func, true, 10), SampleKey::new(&func, true, 11));
        assert_eq!(SampleKey::new(&func, true, 10), SampleKey::new(&func.clone(), true, 10));
    }
}
