//! Single-producer, single-consumer index queue (P1).

use std::sync::atomic::AtomicU32;

use crossbeam_utils::CachePadded;

use crate::word;

/// A lock-free index queue for exactly one producer thread and exactly one
/// consumer thread.
///
/// `SpscQueue` owns no payload storage and no capacity: the factor is
/// supplied by the caller on every `pop`/`push` call, so every call site
/// must agree on it. Because there is only ever one consumer, a committed
/// pop can never be stolen out from under it, so [`SpscQueue::pop_commit`]
/// cannot fail.
///
/// # Preconditions
///
/// `factor` must be in `1..=15` on every call. The queue does not validate
/// this per call (the whole point of the design is that each operation is a
/// single atomic access); passing a factor outside that range produces
/// nonsensical indices rather than a panic.
pub struct SpscQueue {
    state: CachePadded<AtomicU32>,
}

impl SpscQueue {
    /// Creates a new, empty queue.
    pub fn new() -> Self {
        Self {
            state: CachePadded::new(AtomicU32::new(0)),
        }
    }

    /// Observes the next poppable slot.
    ///
    /// Returns `(index, false)` if a slot is available, or `(-1, true)` if
    /// the queue is empty. Must be followed by [`SpscQueue::pop_commit`]
    /// before another `pop` is issued.
    pub fn pop(&self, factor: u32) -> (i32, bool) {
        let (index, _savepoint, empty) = word::raw_pop(&self.state, factor);
        (index, empty)
    }

    /// Commits the slot most recently returned by [`SpscQueue::pop`],
    /// freeing it for reuse by the producer.
    pub fn pop_commit(&self) {
        word::raw_pop_commit_unconditional(&self.state);
    }

    /// Reserves the next pushable slot.
    ///
    /// Returns `(index, false)` if a slot is available, or `(-1, true)` if
    /// the queue is full. Must be followed by [`SpscQueue::push_commit`]
    /// before another `push` is issued.
    pub fn push(&self, factor: u32) -> (i32, bool) {
        word::raw_push(&self.state, factor)
    }

    /// Publishes the slot most recently returned by [`SpscQueue::push`],
    /// making it visible to the consumer's next `pop`.
    pub fn push_commit(&self) {
        word::raw_push_commit(&self.state);
    }
}

impl Default for SpscQueue {
    fn default() -> Self {
        Self::new()
    }
}
