use std::collections::VecDeque;

/// Bounded FIFO of recent samples, oldest first.
///
/// Owned by a single widget instance.  Consecutive duplicates are ignored so
/// a re-delivered update does not count as a new tick.
#[derive(Debug, Clone)]
pub struct HistoryBuffer<T> {
    samples: VecDeque<T>,
    limit:   usize,
}

impl<T: PartialEq> HistoryBuffer<T> {
    /// Create an empty buffer.  A `limit` of zero is clamped to one.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            samples: VecDeque::with_capacity(limit),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Change the capacity.  Shrinking trims the oldest entries immediately.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
        self.trim();
    }

    /// Push a sample, evicting the oldest entries beyond the limit.
    ///
    /// Returns `false` when the sample was absent or equal to the most
    /// recently appended one and nothing changed.
    pub fn append(&mut self, sample: Option<T>) -> bool {
        let Some(sample) = sample else {
            return false;
        };
        if self.samples.back() == Some(&sample) {
            return false;
        }
        self.samples.push_back(sample);
        self.trim();
        true
    }

    /// Buffer contents in insertion order, oldest first.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + Clone {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&T> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    fn trim(&mut self) {
        while self.samples.len() > self.limit {
            self.samples.pop_front();
        }
    }
}
