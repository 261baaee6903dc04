//! Single-producer, multi-consumer index queue with an external capacity
//! factor (P2).

use std::sync::atomic::AtomicU32;

use crossbeam_utils::CachePadded;

use crate::word;

/// A snapshot of a queue's packed state, captured by [`SpmcQueue::pop`] and
/// presented back to [`SpmcQueue::pop_commit`] to prove no other consumer
/// has already taken the same slot.
pub type Savepoint = u32;

/// A lock-free index queue for exactly one producer thread and any number
/// of concurrent consumer threads.
///
/// Producer operations are identical to [`crate::SpscQueue`]: only one
/// thread ever calls `push`/`push_commit`, so those remain unconditional.
/// Consumer operations differ because more than one consumer may observe
/// the same slot via `pop`; only the first [`SpmcQueue::pop_commit`]
/// carrying that slot's savepoint succeeds, and every other consumer that
/// raced for it must discard whatever it read and retry `pop`.
///
/// # Preconditions
///
/// `factor` must be in `1..=15` on every call and must be the same value
/// every caller uses; see [`crate::SpmcSizedQueue`] for a variant that
/// removes this precondition by storing the factor in the queue itself.
pub struct SpmcQueue {
    state: CachePadded<AtomicU32>,
}

impl SpmcQueue {
    /// Creates a new, empty queue.
    pub fn new() -> Self {
        Self {
            state: CachePadded::new(AtomicU32::new(0)),
        }
    }

    /// Observes the next poppable slot without claiming it.
    ///
    /// Returns `(index, savepoint, false)` if a slot is available, or
    /// `(-1, 0, true)` if the queue is empty. The caller must not act on the
    /// payload at `index` until [`SpmcQueue::pop_commit`] with this
    /// `savepoint` returns `true` — another consumer may be reading or
    /// about to overwrite the same slot.
    pub fn pop(&self, factor: u32) -> (i32, Savepoint, bool) {
        word::raw_pop(&self.state, factor)
    }

    /// Attempts to commit the pop observed with `savepoint`.
    ///
    /// Returns `true` if this call won the race for the slot: the caller
    /// now exclusively owns the payload it read and may act on it. Returns
    /// `false` if another consumer committed first: the caller must discard
    /// whatever it read and call [`SpmcQueue::pop`] again.
    pub fn pop_commit(&self, savepoint: Savepoint) -> bool {
        word::raw_pop_commit_cas(&self.state, savepoint)
    }

    /// Reserves the next pushable slot. See [`crate::SpscQueue::push`].
    pub fn push(&self, factor: u32) -> (i32, bool) {
        word::raw_push(&self.state, factor)
    }

    /// Publishes the slot most recently returned by [`SpmcQueue::push`].
    pub fn push_commit(&self) {
        word::raw_push_commit(&self.state);
    }
}

impl Default for SpmcQueue {
    fn default() -> Self {
        Self::new()
    }
}
