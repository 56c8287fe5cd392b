// Copyright 2025 the Promenade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=promenade_form --heading-base-level=0

//! Promenade Form: an enquiry-form submission state machine.
//!
//! A contact form on a page without a backend still has a lifecycle: the
//! visitor types, presses send, watches a spinner for a moment, sees a
//! success panel, and eventually gets a fresh form back. [`EnquiryForm`]
//! models exactly that as three states with two scheduled transitions:
//!
//! ```text
//! Idle --submit()--> Submitting --(send delay)--> Succeeded --(reset delay)--> Idle
//! ```
//!
//! Time comes from the host through [`EnquiryForm::advance`], driving an
//! internal [`promenade_timing::TimerQueue`]; nothing here sleeps or touches
//! a clock, so the whole lifecycle runs deterministically under test. The
//! simulated send always succeeds — there is no transport, so there is no
//! failure state to model. A host wiring a real backend would add one.
//!
//! ## Minimal example
//!
//! ```rust
//! use promenade_form::{EnquiryForm, Field, SubmissionStatus};
//!
//! let mut form = EnquiryForm::new();
//! form.set_field(Field::Name, "Alexandra Mitchell");
//! form.set_field(Field::Email, "alexandra@example.com");
//! form.set_field(Field::EventType, "Private Dining");
//! form.set_field(Field::Message, "An anniversary dinner for two.");
//! assert!(form.is_complete());
//!
//! form.submit();
//! assert_eq!(form.status(), SubmissionStatus::Submitting);
//!
//! // The simulated send completes after the send delay (1500 by default)...
//! form.advance(1500);
//! assert_eq!(form.status(), SubmissionStatus::Succeeded);
//! assert_eq!(form.field(Field::Name), "");
//!
//! // ...and the success panel gives way to a fresh form after the reset
//! // delay (5000 by default).
//! form.advance(1500 + 5000);
//! assert_eq!(form.status(), SubmissionStatus::Idle);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;

use promenade_timing::TimerQueue;

/// Where a submission currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Accepting edits; `submit` is available.
    #[default]
    Idle,
    /// The simulated send is in flight; re-submission is ignored.
    Submitting,
    /// The success panel is showing; the form resets itself shortly.
    Succeeded,
}

/// The four fields an enquiry carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// The visitor's name.
    Name,
    /// A reply address.
    Email,
    /// What kind of event is being enquired about.
    EventType,
    /// Free-form message body.
    Message,
}

impl Field {
    /// All fields, in display order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::EventType, Self::Message];

    const fn slot(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::EventType => 2,
            Self::Message => 3,
        }
    }
}

/// Delays for the two scheduled transitions, in host tick units.
///
/// The defaults reproduce the usual page feel with millisecond ticks: the
/// spinner shows for 1.5 seconds, the success panel for 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormTimings {
    /// Ticks from `submit` until the simulated send completes.
    pub send_delay: u64,
    /// Ticks the success panel stays up before the form resets.
    pub reset_delay: u64,
}

impl Default for FormTimings {
    fn default() -> Self {
        Self {
            send_delay: 1500,
            reset_delay: 5000,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum FormTimer {
    SendComplete,
    ResetElapsed,
}

/// The enquiry form: four fields plus the submission lifecycle.
#[derive(Clone, Debug, Default)]
pub struct EnquiryForm {
    fields: [String; 4],
    status: SubmissionStatus,
    timings: FormTimings,
    timers: TimerQueue<FormTimer>,
    revision: u64,
}

impl EnquiryForm {
    /// Creates an idle, empty form with default timings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle, empty form with the given timings.
    #[must_use]
    pub fn with_timings(timings: FormTimings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    /// Returns the current submission status.
    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Returns the current value of a field.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        &self.fields[field.slot()]
    }

    /// Returns `true` when every field is non-empty.
    ///
    /// Hosts use this to gate their submit control; `submit` itself does not
    /// require it.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(|value| !value.is_empty())
    }

    /// Returns the current revision counter.
    ///
    /// Bumps on every field edit, status transition, and reset.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Sets a field's value.
    ///
    /// Edits are accepted while idle or while the simulated send is in
    /// flight (the inputs stay live under the spinner). While the success
    /// panel is showing the form is not on screen, so edits are ignored.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.status == SubmissionStatus::Succeeded {
            return;
        }
        let value = value.into();
        let slot = &mut self.fields[field.slot()];
        if *slot == value {
            return;
        }
        *slot = value;
        self.bump_revision();
    }

    /// Begins the simulated send.
    ///
    /// Valid only from `Idle`; from any other state this is a silent no-op,
    /// which is what makes double-clicking the submit control harmless. The
    /// send completes `send_delay` ticks later, at which point the fields
    /// clear and the success panel shows.
    pub fn submit(&mut self) {
        if self.status != SubmissionStatus::Idle {
            return;
        }
        self.status = SubmissionStatus::Submitting;
        self.timers
            .schedule_after(self.timings.send_delay, FormTimer::SendComplete);
        self.bump_revision();
    }

    /// Advances the form's clock, applying any due transitions.
    ///
    /// Returns `true` if the status changed. `now` is monotonic; stale ticks
    /// are ignored by the underlying queue.
    pub fn advance(&mut self, now: u64) -> bool {
        let before = self.status;
        for timer in self.timers.advance(now) {
            match timer {
                FormTimer::SendComplete => self.complete_send(),
                FormTimer::ResetElapsed => self.restore_idle(),
            }
        }
        before != self.status
    }

    /// Tears the lifecycle down immediately.
    ///
    /// Cancels any in-flight timers, clears the fields, and returns to
    /// `Idle`. Called when the owning view unmounts mid-flight; harmless on
    /// an idle form.
    pub fn reset(&mut self) {
        self.timers.clear();
        let was_dirty =
            self.status != SubmissionStatus::Idle || self.fields.iter().any(|v| !v.is_empty());
        self.status = SubmissionStatus::Idle;
        for slot in &mut self.fields {
            slot.clear();
        }
        if was_dirty {
            self.bump_revision();
        }
    }

    fn complete_send(&mut self) {
        // Only reachable from Submitting; the queue holds at most one timer.
        self.status = SubmissionStatus::Succeeded;
        for slot in &mut self.fields {
            slot.clear();
        }
        self.timers
            .schedule_after(self.timings.reset_delay, FormTimer::ResetElapsed);
        self.bump_revision();
    }

    fn restore_idle(&mut self) {
        self.status = SubmissionStatus::Idle;
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
