// Copyright 2025 the Promenade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=promenade_timing --heading-base-level=0

//! Promenade Timing: host-agnostic timer queue primitives.
//!
//! UI state machines occasionally need "later": a simulated send that
//! completes after a delay, a success message that hides itself, a tooltip
//! that waits before appearing. This crate provides [`TimerQueue`], a small
//! deadline queue that owns none of the clock: the host feeds monotonic
//! ticks in whatever unit it likes (milliseconds in practice) and drains the
//! events that have come due. That keeps every timer-driven transition
//! deterministic and unit-testable — tests advance time by calling a method,
//! not by sleeping.
//!
//! - [`TimerQueue::schedule_after`] / [`TimerQueue::schedule_at`] enqueue an
//!   event and return a [`TimerHandle`].
//! - [`TimerQueue::cancel`] revokes a pending timer by handle; cancelling a
//!   fired or unknown handle is a no-op. Owners cancel their in-flight
//!   timers on teardown.
//! - [`TimerQueue::advance`] moves the clock forward and yields every due
//!   event in `(deadline, schedule order)` order. The clock never moves
//!   backwards; a stale tick drains nothing.
//!
//! ## Minimal example
//!
//! ```rust
//! use promenade_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule_after(1500, "send-complete");
//! let reset = timers.schedule_after(5000, "auto-reset");
//!
//! assert_eq!(timers.advance(1000).count(), 0); // nothing due yet
//!
//! let fired: Vec<_> = timers.advance(2000).collect();
//! assert_eq!(fired, ["send-complete"]);
//!
//! timers.cancel(reset); // owner torn down before the reset fired
//! assert_eq!(timers.advance(10_000).count(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use smallvec::SmallVec;

/// Handle to a scheduled timer, used for cancellation.
///
/// Handles are unique over the lifetime of a queue and never reused, so a
/// stale handle held past its timer's firing can only ever be a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle(u64);

#[derive(Clone, Debug)]
struct Entry<E> {
    id: u64,
    deadline: u64,
    event: E,
}

/// A deadline queue over host-supplied monotonic ticks.
///
/// The queue stores pending entries inline while they are few, which they
/// essentially always are for UI transition timers.
#[derive(Clone, Debug)]
pub struct TimerQueue<E> {
    entries: SmallVec<[Entry<E>; 4]>,
    next_id: u64,
    now: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    /// Creates an empty queue with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
            now: 0,
        }
    }

    /// Returns the queue's current tick.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the earliest pending deadline, if any.
    ///
    /// Hosts integrating with a real event loop use this to decide how long
    /// to sleep before the next [`TimerQueue::advance`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Schedules `event` to fire at the absolute tick `deadline`.
    ///
    /// A deadline at or before the current tick fires on the next advance.
    pub fn schedule_at(&mut self, deadline: u64, event: E) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline,
            event,
        });
        TimerHandle(id)
    }

    /// Schedules `event` to fire `delay` ticks from the current tick.
    pub fn schedule_after(&mut self, delay: u64, event: E) -> TimerHandle {
        self.schedule_at(self.now.saturating_add(delay), event)
    }

    /// Cancels a pending timer.
    ///
    /// Returns `true` if the timer was still pending. Cancelling an
    /// already-fired, already-cancelled, or foreign handle returns `false`
    /// and changes nothing.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != handle.0);
        self.entries.len() != before
    }

    /// Cancels every pending timer without touching the clock.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Advances the clock to `now` and drains every due event.
    ///
    /// Events fire in `(deadline, schedule order)` order. Ticks are
    /// monotonic: if `now` is behind the queue's clock the clock stays put,
    /// and only entries due at the existing clock drain (those scheduled
    /// with zero delay, for example).
    pub fn advance(&mut self, now: u64) -> Fired<E> {
        if now > self.now {
            self.now = now;
        }
        let cutoff = self.now;

        let mut due: Vec<Entry<E>> = Vec::new();
        let mut idx = 0;
        while idx < self.entries.len() {
            if self.entries[idx].deadline <= cutoff {
                due.push(self.entries.remove(idx));
            } else {
                idx += 1;
            }
        }
        due.sort_by_key(|entry| (entry.deadline, entry.id));

        Fired {
            inner: due.into_iter(),
        }
    }
}

/// Iterator over the events drained by one [`TimerQueue::advance`] call.
#[derive(Debug)]
pub struct Fired<E> {
    inner: alloc::vec::IntoIter<Entry<E>>,
}

impl<E> Iterator for Fired<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.inner.next().map(|entry| entry.event)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> ExactSizeIterator for Fired<E> {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::TimerQueue;

    #[test]
    fn new_queue_is_idle() {
        let mut timers = TimerQueue::<u8>::new();
        assert!(timers.is_empty());
        assert_eq!(timers.now(), 0);
        assert_eq!(timers.next_deadline(), None);
        assert_eq!(timers.advance(100).count(), 0);
    }

    #[test]
    fn events_fire_at_their_deadline_not_before() {
        let mut timers = TimerQueue::new();
        timers.schedule_after(50, 'x');

        assert_eq!(timers.advance(49).count(), 0);
        let fired: Vec<char> = timers.advance(50).collect();
        assert_eq!(fired, ['x']);
        assert!(timers.is_empty());
    }

    #[test]
    fn due_events_drain_in_deadline_then_schedule_order() {
        let mut timers = TimerQueue::new();
        timers.schedule_at(30, 'c');
        timers.schedule_at(10, 'a');
        timers.schedule_at(10, 'b');

        let fired: Vec<char> = timers.advance(100).collect();
        // 'a' was scheduled after 'c' but its deadline is earlier; 'a' and
        // 'b' share a deadline and keep schedule order.
        assert_eq!(fired, ['a', 'b', 'c']);
    }

    #[test]
    fn advance_only_drains_due_entries() {
        let mut timers = TimerQueue::new();
        timers.schedule_at(10, 1);
        timers.schedule_at(20, 2);

        let fired: Vec<i32> = timers.advance(15).collect();
        assert_eq!(fired, [1]);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_deadline(), Some(20));
    }

    #[test]
    fn cancel_revokes_pending_timers_only() {
        let mut timers = TimerQueue::new();
        let a = timers.schedule_after(10, 'a');
        let b = timers.schedule_after(20, 'b');

        assert!(timers.cancel(a));
        assert!(!timers.cancel(a)); // already cancelled

        let fired: Vec<char> = timers.advance(100).collect();
        assert_eq!(fired, ['b']);
        assert!(!timers.cancel(b)); // already fired
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut timers = TimerQueue::new();
        timers.advance(100);
        assert_eq!(timers.now(), 100);

        timers.advance(40);
        assert_eq!(timers.now(), 100);

        // A zero-delay timer still fires against the unchanged clock.
        timers.schedule_after(0, 'z');
        let fired: Vec<char> = timers.advance(50).collect();
        assert_eq!(fired, ['z']);
    }

    #[test]
    fn clear_drops_everything_pending() {
        let mut timers = TimerQueue::new();
        timers.schedule_after(10, 1);
        timers.schedule_after(20, 2);
        timers.clear();
        assert!(timers.is_empty());
        assert_eq!(timers.advance(1000).count(), 0);
    }

    #[test]
    fn past_deadlines_fire_on_next_advance() {
        let mut timers = TimerQueue::new();
        timers.advance(500);
        timers.schedule_at(100, 'p');

        let fired: Vec<char> = timers.advance(500).collect();
        assert_eq!(fired, ['p']);
    }
}
