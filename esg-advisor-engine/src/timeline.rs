//! Offset-based event scheduling
//!
//! The prototype drove its simulation with nested wall-clock timers. Here
//! every future effect is an explicit `(due, event)` entry on a [`Timeline`],
//! drained against a caller-supplied clock reading. The host feeds real
//! elapsed time; tests feed synthetic durations and get identical behavior.

use std::time::Duration;

#[derive(Debug, Clone)]
struct Entry<T> {
    due: Duration,
    seq: u64,
    event: T,
}

/// An ordered schedule of future events for one owner.
///
/// Entries fire in strictly increasing `(due, insertion)` order, so two
/// entries are never ordered ambiguously. Dropping the timeline cancels
/// everything still pending; nothing fires after teardown.
#[derive(Debug)]
pub struct Timeline<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedule `event` to fire once the clock reaches `due`.
    pub fn schedule(&mut self, due: Duration, event: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let idx = self.entries.partition_point(|e| (e.due, e.seq) <= (due, seq));
        self.entries.insert(idx, Entry { due, seq, event });
    }

    /// Drain and return every event due at or before `now`, in firing order.
    /// Each entry fires exactly once.
    pub fn advance_to(&mut self, now: Duration) -> Vec<T> {
        let split = self.entries.partition_point(|e| e.due <= now);
        self.entries.drain(..split).map(|e| e.event).collect()
    }

    /// Due time of the earliest pending entry.
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.first().map(|e| e.due)
    }

    /// Remove and return the earliest pending entry, regardless of the clock.
    pub fn pop_next(&mut self) -> Option<T> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0).event)
        }
    }

    /// Number of entries still pending.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Cancel everything still pending.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
