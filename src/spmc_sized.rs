//! Single-producer, multi-consumer index queue with the capacity factor
//! embedded in the value (P3).

use std::io;
use std::sync::atomic::AtomicU32;

use crossbeam_utils::CachePadded;

use crate::spmc::Savepoint;
use crate::word;

const MIN_FACTOR: u32 = 1;
const MAX_FACTOR: u32 = 15;

/// Same protocol as [`crate::SpmcQueue`], but the capacity factor is fixed
/// at construction and stored alongside the state word instead of being
/// passed to every call.
///
/// This exists purely to prevent the class of bug where two call sites
/// disagree on `factor` for the same [`crate::SpmcQueue`]: baking the
/// factor into the value means there is only one place it can be set.
pub struct SpmcSizedQueue {
    state: CachePadded<AtomicU32>,
    factor: u32,
}

impl SpmcSizedQueue {
    /// Creates a new, empty queue with the given capacity factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `factor` is outside `1..=15`. Unlike the
    /// per-call `factor` on [`crate::SpscQueue`] and [`crate::SpmcQueue`],
    /// this value is fixed for the queue's entire lifetime, so it is
    /// validated once here rather than left as a documented precondition.
    pub fn new(factor: u32) -> io::Result<Self> {
        if !(MIN_FACTOR..=MAX_FACTOR).contains(&factor) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "SpmcSizedQueue::new(): factor must be in {}..={}, got {}",
                    MIN_FACTOR, MAX_FACTOR, factor
                ),
            ));
        }
        Ok(Self {
            state: CachePadded::new(AtomicU32::new(0)),
            factor,
        })
    }

    /// The capacity factor this queue was constructed with.
    pub fn factor(&self) -> u32 {
        self.factor
    }

    /// Observes the next poppable slot without claiming it. See
    /// [`crate::SpmcQueue::pop`].
    pub fn pop(&self) -> (i32, Savepoint, bool) {
        word::raw_pop(&self.state, self.factor)
    }

    /// Attempts to commit the pop observed with `savepoint`. See
    /// [`crate::SpmcQueue::pop_commit`].
    pub fn pop_commit(&self, savepoint: Savepoint) -> bool {
        word::raw_pop_commit_cas(&self.state, savepoint)
    }

    /// Reserves the next pushable slot. See [`crate::SpmcQueue::push`].
    pub fn push(&self) -> (i32, bool) {
        word::raw_push(&self.state, self.factor)
    }

    /// Publishes the slot most recently returned by
    /// [`SpmcSizedQueue::push`].
    pub fn push_commit(&self) {
        word::raw_push_commit(&self.state);
    }
}
