use crate::sample::Sample;
use std::collections::VecDeque;

/// Scrolling history of samples, oldest first.
///
/// Capacity is fixed when the window is created (one sample per graph
/// column); pushing onto a full window evicts the oldest sample.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    samples:  VecDeque<Sample>,
    capacity: usize,
}

impl SampleWindow {
    /// A zero capacity is bumped to one so the newest sample is always kept.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample at the newest end, evicting from the oldest end.
    pub fn push(&mut self, sample: Sample) {
        while self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Samples oldest → newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Sample> + '_ {
        self.samples.iter()
    }

    /// Samples oldest → newest, each paired with its predecessor
    /// (`None` for the oldest).
    pub fn iter_with_prev(&self) -> impl Iterator<Item = (Option<&Sample>, &Sample)> + '_ {
        let prev = std::iter::once(None).chain(self.samples.iter().map(Some));
        prev.zip(self.samples.iter())
    }

    pub fn newest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Largest value of any series across the whole window (`0.0` if empty).
    pub fn max_value(&self) -> f64 {
        self.samples.iter().map(Sample::peak).fold(0.0, f64::max)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
