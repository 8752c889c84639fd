//! Bounded FIFO history.
//!
//! A fixed-capacity ring buffer over `VecDeque`. Pushing onto a full buffer
//! evicts the oldest entry, so memory never grows past the configured
//! capacity.

use crate::error::{ResonanceError, Result};
use serde::Serialize;
use std::collections::VecDeque;

/// Fixed-capacity ring buffer that evicts its oldest entry on overflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct History<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> History<T> {
    /// Create an empty history. A zero capacity is a configuration error.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ResonanceError::invalid_config(
                "history_capacity",
                "0",
                "history must hold at least one sample",
            ));
        }
        Ok(Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append an entry, returning the evicted one if the buffer was full.
    pub fn push(&mut self, entry: T) -> Option<T> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    pub fn last(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn first(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter()
    }
}

impl<T: Clone> History<T> {
    /// Copy the entries out, oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(History::<u32>::new(0).is_err());
    }

    #[test]
    fn fills_up_to_capacity() {
        let mut h = History::new(3).unwrap();
        assert!(h.is_empty());
        assert_eq!(h.push(1), None);
        assert_eq!(h.push(2), None);
        assert_eq!(h.push(3), None);
        assert!(h.is_full());
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn overflow_evicts_oldest_in_order() {
        let capacity = 5;
        let extra = 4;
        let mut h = History::new(capacity).unwrap();
        let mut evicted = Vec::new();
        for i in 0..(capacity + extra) {
            if let Some(e) = h.push(i) {
                evicted.push(e);
            }
            assert!(h.len() <= capacity);
        }
        assert_eq!(h.len(), capacity);
        assert_eq!(evicted, vec![0, 1, 2, 3]);
        assert_eq!(h.to_vec(), vec![4, 5, 6, 7, 8]);
        assert_eq!(h.first(), Some(&4));
        assert_eq!(h.last(), Some(&8));
    }

    #[test]
    fn capacity_one_keeps_latest() {
        let mut h = History::new(1).unwrap();
        h.push("a");
        assert_eq!(h.push("b"), Some("a"));
        assert_eq!(h.iter().collect::<Vec<_>>(), vec![&"b"]);
    }
}
