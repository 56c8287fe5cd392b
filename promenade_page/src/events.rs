// Copyright 2025 the Promenade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use promenade_form::Field;

use crate::SectionId;

/// An inbound signal from the host.
///
/// Events are the page's only mutation surface; each carries the identifier
/// and payload of one discrete browser-side occurrence. Signal flow is
/// one-way: hosts construct events from raw notifications and read derived
/// state back through `Page`'s accessors.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// A scroll notification. Bursts coalesce; only the latest offset
    /// matters to scroll-derived state.
    Scroll {
        /// Absolute scroll offset in pixels.
        offset_px: f64,
    },
    /// An intersection sample for one section.
    SectionRatio {
        /// The observed section.
        section: SectionId,
        /// Fraction of the section's bounds inside the viewport.
        ratio: f64,
    },
    /// The mobile nav button was pressed.
    ToggleNav,
    /// A nav link was followed. Closes the mobile nav; the host performs
    /// the actual anchor scroll.
    Navigate {
        /// The link's target section.
        section: SectionId,
    },
    /// A menu category chip was pressed. Index 0 is the "All" chip.
    SelectCategory {
        /// Chip index into `Page::categories`.
        index: usize,
    },
    /// The testimonial carousel's forward arrow.
    NextTestimonial,
    /// The testimonial carousel's backward arrow.
    PreviousTestimonial,
    /// A testimonial dot indicator was pressed.
    JumpToTestimonial {
        /// Dot index into the visible testimonials.
        index: usize,
    },
    /// An enquiry field changed.
    FieldChanged {
        /// The edited field.
        field: Field,
        /// The field's new full value.
        value: String,
    },
    /// The enquiry form was submitted.
    Submit,
    /// A clock tick, driving the form's scheduled transitions.
    Tick {
        /// The host's monotonic time, in the form's tick units.
        now: u64,
    },
}

bitflags::bitflags! {
    /// Which derived state an event touched.
    ///
    /// Hosts re-render only the flagged parts. An empty mask means the event
    /// was absorbed without observable effect (a sub-threshold intersection
    /// sample, a no-op re-submission, a tick with nothing due).
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Changes: u8 {
        /// The committed scroll offset moved; parallax output is stale.
        const SCROLL = 1 << 0;
        /// A section revealed.
        const REVEAL = 1 << 1;
        /// The mobile nav opened or closed.
        const NAV = 1 << 2;
        /// The menu's category or visible items changed.
        const MENU = 1 << 3;
        /// The testimonial cursor moved.
        const TESTIMONIALS = 1 << 4;
        /// The enquiry form's fields or status changed.
        const FORM = 1 << 5;
    }
}
