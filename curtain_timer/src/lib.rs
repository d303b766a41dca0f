// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curtain Timer: deterministic, cancellable one-shot timers.
//!
//! UI state machines often need "do this in 800ms unless something else happens first".
//! This crate models that as a small queue of pending one-shot timers keyed by
//! opaque [`TimerId`] handles. It never reads a clock: every operation takes the
//! caller's current timestamp in milliseconds, so behavior is reproducible in tests
//! and identical across hosts (native event loops, the web, embedded).
//!
//! ## Semantics
//!
//! - [`TimerQueue::schedule`] returns a fresh [`TimerId`]. Ids are never reused.
//! - [`TimerQueue::cancel`] is idempotent and safe to call after the timer has fired.
//! - A timer is due when `now >= deadline`.
//! - [`TimerQueue::pop_due`] yields due timers earliest-deadline first; timers with
//!   equal deadlines fire in the order they were scheduled.
//! - [`TimerQueue::clear`] discards everything that is still pending (teardown).
//!
//! ## Example
//!
//! ```rust
//! use curtain_timer::TimerQueue;
//!
//! #[derive(Debug, PartialEq)]
//! enum Job {
//!     Unlock,
//!     Revert,
//! }
//!
//! let mut timers = TimerQueue::new();
//! let unlock = timers.schedule(1_000, 800, Job::Unlock);
//! let revert = timers.schedule(1_000, 5_000, Job::Revert);
//!
//! // Supersede the revert timer.
//! assert!(timers.cancel(revert));
//! assert!(!timers.cancel(revert));
//!
//! assert_eq!(timers.pop_due(1_500), None);
//! assert_eq!(timers.pop_due(1_800), Some((unlock, Job::Unlock)));
//! assert!(timers.is_empty());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use core::num::NonZeroU64;

use smallvec::SmallVec;

/// Handle to a scheduled timer.
///
/// Handles are unique for the lifetime of the [`TimerQueue`] that issued them, so a
/// stale handle can never cancel or observe a newer timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(NonZeroU64);

impl TimerId {
    /// Raw sequence number of this handle, mainly useful for logging.
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: u64,
    payload: T,
}

/// A queue of pending one-shot timers carrying a payload of type `T`.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    // Components own a handful of timers at most; keep them inline.
    entries: SmallVec<[Entry<T>; 4]>,
    next_id: u64,
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 1,
        }
    }

    /// Schedule `payload` to become due `delay` milliseconds after `now`.
    pub fn schedule(&mut self, now: u64, delay: u64, payload: T) -> TimerId {
        let id = self.allocate_id();
        self.entries.push(Entry {
            id,
            deadline: now.saturating_add(delay),
            payload,
        });
        id
    }

    /// Cancel a pending timer.
    ///
    /// Returns `true` if the timer was pending and is now discarded, `false` if it
    /// already fired, was already canceled, or was cleared.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Cancel `id` if present, leaving the slot empty.
    ///
    /// Convenience for components that store their handle in an `Option`.
    pub fn cancel_slot(&mut self, slot: &mut Option<TimerId>) -> bool {
        slot.take().is_some_and(|id| self.cancel(id))
    }

    /// Whether `id` is still waiting to fire.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Deadline of a pending timer.
    pub fn deadline(&self, id: TimerId) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.deadline)
    }

    /// Earliest deadline among pending timers.
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Remove and return the earliest timer that is due at `now`.
    ///
    /// Call repeatedly until it returns `None` to drain everything that is due.
    pub fn pop_due(&mut self, now: u64) -> Option<(TimerId, T)> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline <= now)
            .min_by_key(|(_, entry)| (entry.deadline, entry.id))
            .map(|(index, _)| index)?;
        let entry = self.entries.remove(index);
        Some((entry.id, entry.payload))
    }

    /// Discard every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no timers are pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn allocate_id(&mut self) -> TimerId {
        let raw = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        // `next_id` starts at 1 and skips 0 on wraparound.
        TimerId(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN))
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
