//! Bounded short-term memory of recent moves.

use std::collections::{HashSet, VecDeque};

use crate::tour::MoveKey;

/// FIFO of recently taken moves with a set for O(1) membership tests.
///
/// Holds at most `capacity` distinct keys; inserting past capacity expires
/// the oldest one.
#[derive(Debug, Clone)]
pub struct TabuMemory {
    capacity: usize,
    queue: VecDeque<MoveKey>, // insertion order, oldest first
    set: HashSet<MoveKey>,
}

impl TabuMemory {
    /// Creates an empty memory.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "called `TabuMemory::new()` with zero capacity");
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity + 1),
            set: HashSet::with_capacity(capacity + 1),
        }
    }

    /// Returns `true` if `key` is currently tabu.
    #[inline]
    pub fn contains(&self, key: &MoveKey) -> bool {
        self.set.contains(key)
    }

    /// Records `key` as the newest tabu move.
    ///
    /// A key that is already tabu is moved to the back of the queue, so it
    /// expires as if freshly taken.
    pub fn insert(&mut self, key: MoveKey) {
        if !self.set.insert(key) {
            self.queue.retain(|k| *k != key);
        }
        self.queue.push_back(key);
        if self.queue.len() > self.capacity {
            if let Some(old) = self.queue.pop_front() {
                self.set.remove(&old);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
