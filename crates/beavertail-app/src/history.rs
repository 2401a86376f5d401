//! Bounded history of received log records

use std::collections::VecDeque;

use beavertail_core::LogRecord;

/// Number of records retained when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 1000;

/// Largest capacity accepted from config or the command line
pub const MAX_CAPACITY: usize = 1_000_000;

/// Bounded FIFO of the most recent log records, oldest first.
///
/// The length never exceeds the capacity: appending at capacity evicts
/// exactly one record, the oldest.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    records: VecDeque<LogRecord>,
    capacity: usize,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty buffer with `capacity` clamped to `1..=MAX_CAPACITY`.
    ///
    /// Storage grows on demand; only up to `DEFAULT_CAPACITY` slots are
    /// reserved up front.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_CAPACITY);
        Self {
            records: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Add a record at the tail, evicting the oldest one if over capacity
    pub fn append(&mut self, record: LogRecord) {
        self.records.push_back(record);
        if self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All retained records, oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogRecord> + ExactSizeIterator {
        self.records.iter()
    }

    /// The last `n` records (or all of them if fewer), oldest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &LogRecord> {
        let start = self.records.len().saturating_sub(n);
        self.records.range(start..)
    }
}
