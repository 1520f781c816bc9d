//! Bounded record of the responses handed back to callers.

pub mod transcript;

pub use transcript::{Exchange, Transcript};

use std::collections::VecDeque;

use tracing::debug;

use crate::response::ResponseRecord;

/// FIFO of returned responses; the oldest entries are evicted past capacity.
///
/// A capacity of `0` means the queue never evicts.
#[derive(Debug, Default)]
pub struct HistoryQueue {
    capacity: usize,
    entries: VecDeque<ResponseRecord>,
}

impl HistoryQueue {
    /// Creates a queue holding at most `capacity` records (`0` = unbounded).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { capacity, entries: VecDeque::new() }
    }

    /// Appends `record`, evicting from the front until within capacity.
    pub fn push(&mut self, record: ResponseRecord) {
        self.entries.push_back(record);
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                debug!(url = evicted.url(), capacity = self.capacity, "evicted oldest response");
            }
        }
    }

    /// Copy of the held records, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ResponseRecord> {
        self.entries.iter().cloned().collect()
    }

    /// Iterates the held records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ResponseRecord> {
        self.entries.iter()
    }

    /// Most recently pushed record.
    #[must_use]
    pub fn last(&self) -> Option<&ResponseRecord> {
        self.entries.back()
    }

    /// Configured capacity (`0` = unbounded).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of held records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every held record.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
