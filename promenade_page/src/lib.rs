// Copyright 2025 the Promenade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=promenade_page --heading-base-level=0

//! Promenade Page: composed presentation state for one scrolling page.
//!
//! This crate wires the Promenade primitives into the state of a complete
//! single-page site — a private-chef page with a parallax hero, reveal-on-
//! scroll sections, a category-filtered menu, a testimonial carousel, and an
//! enquiry form. The division of labor:
//!
//! - The **host** (a DOM binding, a native view layer, a test script) owns
//!   the real signal sources: scroll notifications, intersection ratios,
//!   clicks, keystrokes, and a clock.
//! - [`Page`] owns the derivation rules. Hosts push [`Event`]s through
//!   [`Page::apply`] and get back a [`Changes`] mask saying which derived
//!   state an event touched; everything else is read-only accessors.
//!
//! Section copy and records (menu items, testimonials, nav links, …) live in
//! [`content`] as fixed `'static` tables; [`Page`] holds every derived view
//! over them.
//!
//! ## Minimal example
//!
//! ```rust
//! use promenade_page::{Changes, Event, Page, SectionId};
//!
//! let mut page = Page::new();
//!
//! // The visitor scrolls; the hero layers move.
//! let changes = page.apply(Event::Scroll { offset_px: 400.0 }).unwrap();
//! assert_eq!(changes, Changes::SCROLL);
//! let title = page.hero_layers().next().unwrap();
//! assert_eq!(title.offset_px, 40.0);
//!
//! // The menu section scrolls into view and latches revealed.
//! let changes = page
//!     .apply(Event::SectionRatio {
//!         section: SectionId::Menu,
//!         ratio: 0.2,
//!     })
//!     .unwrap();
//! assert_eq!(changes, Changes::REVEAL);
//! assert!(page.is_revealed(SectionId::Menu));
//!
//! // Category chips filter the menu; chip 1 is the first real category.
//! page.apply(Event::SelectCategory { index: 1 }).unwrap();
//! assert_eq!(page.menu().visible_len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod content;
pub mod hero;

mod events;
mod page;

pub use events::{Changes, Event};
pub use page::{Page, PageDebugInfo};

// The page's outward vocabulary is largely its members' types; re-export the
// ones that appear in `Page`'s own signatures.
pub use promenade_form::{Field, SubmissionStatus};
pub use promenade_parallax::LayerState;
pub use promenade_reveal::StaggerTiming;
pub use promenade_selection::{OutOfRangeError, SelectionSet};

/// Identifies one of the page's sections, in scroll order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    /// Parallax hero with the fixed header and dish-card fan.
    Hero,
    /// The four-step process walkthrough.
    HowItWorks,
    /// Category-filtered menu grid.
    Menu,
    /// Gallery grid plus the testimonial carousel.
    Gallery,
    /// About the chef: stats and achievements.
    About,
    /// Enquiry form and contact cards.
    Contact,
    /// Footer link columns.
    Footer,
}

impl SectionId {
    /// Every section, in scroll order.
    pub const ALL: [Self; 7] = [
        Self::Hero,
        Self::HowItWorks,
        Self::Menu,
        Self::Gallery,
        Self::About,
        Self::Contact,
        Self::Footer,
    ];

    /// The intersection threshold at which the section reveals.
    ///
    /// `None` for sections that render without an enter transition: the hero
    /// is visible at load, and the footer simply sits there.
    #[must_use]
    pub fn reveal_threshold(self) -> Option<f64> {
        match self {
            Self::Hero | Self::Footer => None,
            Self::HowItWorks => Some(0.2),
            Self::Menu | Self::Gallery | Self::About => Some(0.15),
            Self::Contact => Some(0.1),
        }
    }

    /// The in-page anchor hosts scroll to for this section, if it has one.
    #[must_use]
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Self::Hero => Some("#"),
            Self::Menu => Some("#menu"),
            Self::Gallery => Some("#gallery"),
            Self::About => Some("#about"),
            Self::Contact => Some("#contact"),
            Self::HowItWorks | Self::Footer => None,
        }
    }
}
