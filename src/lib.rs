//! Lock-free index queues that schedule fixed-size slots between one
//! producer and one or more consumers.
//!
//! A queue here owns no payload: it owns only the indices into an array the
//! caller manages itself. The entire synchronization state fits in one
//! `u32`, manipulated with plain atomic load/add/CAS — no locks, no
//! allocation, no channel.
//!
//! Three variants are provided, in increasing order of capability:
//!
//! - [`SpscQueue`] — single producer, single consumer. A committed pop can
//!   never be stolen, so it cannot fail.
//! - [`SpmcQueue`] — single producer, many consumers, with the capacity
//!   factor supplied on every call. Consumer commits may lose a race and
//!   must be retried.
//! - [`SpmcSizedQueue`] — the same protocol as [`SpmcQueue`], but the
//!   capacity factor is fixed at construction and carried inside the value.
//!
//! None of the three do anything about scheduling, backoff, or the payload
//! array itself; that is entirely up to the caller. See each type's docs
//! for its exact contract.

mod spmc;
mod spmc_sized;
mod spsc;
mod word;

pub use spmc::{Savepoint, SpmcQueue};
pub use spmc_sized::SpmcSizedQueue;
pub use spsc::SpscQueue;
