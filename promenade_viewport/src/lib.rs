// Copyright 2025 the Promenade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=promenade_viewport --heading-base-level=0

//! Promenade Viewport: a coalescing scroll-offset signal.
//!
//! Scroll-driven presentation state (reveal latches, parallax layers) is a
//! pure function of the *current* scroll position, so intermediate offsets
//! delivered between two derivation passes carry no information. This crate
//! provides [`ScrollSignal`], a single mutable cell that separates raw scroll
//! notifications from the committed offset the rest of a page derives from:
//!
//! - [`ScrollSignal::publish`] records a notification. Repeated publishes
//!   overwrite each other; only the most recent value survives.
//! - [`ScrollSignal::commit`] folds the latest pending value into the
//!   committed offset and reports whether anything changed.
//! - [`ScrollSignal::offset`] is the committed offset, always finite and
//!   non-negative.
//!
//! Hosts typically publish from their scroll callback and commit once per
//! frame (or per event-loop turn) before re-deriving dependent state.
//!
//! ## Minimal example
//!
//! ```rust
//! use promenade_viewport::ScrollSignal;
//!
//! let mut scroll = ScrollSignal::new();
//!
//! // Three notifications arrive before the next derivation pass.
//! scroll.publish(120.0);
//! scroll.publish(135.5);
//! scroll.publish(140.0);
//!
//! // Only the latest one is observed.
//! assert_eq!(scroll.commit(), Some(140.0));
//! assert_eq!(scroll.offset(), 140.0);
//!
//! // Committing again without new notifications is a no-op.
//! assert_eq!(scroll.commit(), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// A scroll-offset cell with latest-wins coalescing.
///
/// The committed offset is always finite and non-negative. Notifications
/// carrying negative offsets are clamped to zero; non-finite offsets are
/// discarded outright.
#[derive(Clone, Debug, Default)]
pub struct ScrollSignal {
    offset: f64,
    pending: Option<f64>,
}

impl ScrollSignal {
    /// Creates a signal committed at offset zero with nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: 0.0,
            pending: None,
        }
    }

    /// Records a scroll notification.
    ///
    /// The value is held as pending until the next [`ScrollSignal::commit`];
    /// a later publish before that commit replaces it. Negative offsets are
    /// clamped to zero and non-finite offsets are ignored.
    pub fn publish(&mut self, offset_px: f64) {
        if !offset_px.is_finite() {
            return;
        }
        self.pending = Some(offset_px.max(0.0));
    }

    /// Folds the most recent pending notification into the committed offset.
    ///
    /// Returns `Some(offset)` if the committed offset changed, `None` when
    /// nothing was pending or the pending value equals the committed one.
    pub fn commit(&mut self) -> Option<f64> {
        let pending = self.pending.take()?;
        if pending == self.offset {
            return None;
        }
        self.offset = pending;
        Some(self.offset)
    }

    /// Returns the committed scroll offset in pixels.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns `true` if a notification is waiting to be committed.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollSignal;

    #[test]
    fn new_signal_is_at_origin() {
        let scroll = ScrollSignal::new();
        assert_eq!(scroll.offset(), 0.0);
        assert!(!scroll.has_pending());
    }

    #[test]
    fn commit_applies_latest_publish_only() {
        let mut scroll = ScrollSignal::new();
        scroll.publish(10.0);
        scroll.publish(25.0);
        scroll.publish(18.0);

        assert_eq!(scroll.commit(), Some(18.0));
        assert_eq!(scroll.offset(), 18.0);
    }

    #[test]
    fn commit_without_pending_is_a_noop() {
        let mut scroll = ScrollSignal::new();
        assert_eq!(scroll.commit(), None);

        scroll.publish(5.0);
        assert_eq!(scroll.commit(), Some(5.0));
        assert_eq!(scroll.commit(), None);
        assert_eq!(scroll.offset(), 5.0);
    }

    #[test]
    fn republishing_the_committed_offset_reports_no_change() {
        let mut scroll = ScrollSignal::new();
        scroll.publish(42.0);
        scroll.commit();

        scroll.publish(42.0);
        assert_eq!(scroll.commit(), None);
    }

    #[test]
    fn negative_offsets_clamp_to_zero() {
        let mut scroll = ScrollSignal::new();
        scroll.publish(30.0);
        scroll.commit();

        scroll.publish(-4.0);
        assert_eq!(scroll.commit(), Some(0.0));
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn non_finite_offsets_are_discarded() {
        let mut scroll = ScrollSignal::new();
        scroll.publish(f64::NAN);
        scroll.publish(f64::INFINITY);
        assert!(!scroll.has_pending());
        assert_eq!(scroll.commit(), None);
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn scrolling_back_up_is_allowed() {
        let mut scroll = ScrollSignal::new();
        scroll.publish(500.0);
        scroll.commit();

        scroll.publish(120.0);
        assert_eq!(scroll.commit(), Some(120.0));
    }
}
