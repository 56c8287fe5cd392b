// Copyright 2025 the Promenade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use promenade_form::{EnquiryForm, SubmissionStatus};
use promenade_parallax::{LayerState, ParallaxRig};
use promenade_reveal::{RevealTracker, StaggerTiming};
use promenade_selection::{OutOfRangeError, SelectionSet, distinct};
use promenade_viewport::ScrollSignal;

use crate::content::{self, MenuItem, Testimonial};
use crate::events::{Changes, Event};
use crate::{SectionId, hero};

/// The whole page's presentation state.
///
/// One instance per mounted page. All mutation funnels through
/// [`Page::apply`]; every other public method is a read-only view for the
/// rendering layer.
#[derive(Debug)]
pub struct Page {
    scroll: ScrollSignal,
    reveal: RevealTracker<SectionId>,
    hero: ParallaxRig,
    stagger: StaggerTiming,
    nav_open: bool,
    categories: Vec<&'static str>,
    active_category: usize,
    menu: SelectionSet<MenuItem>,
    testimonials: SelectionSet<Testimonial>,
    form: EnquiryForm,
}

impl Page {
    /// Creates the page in its load state: nothing revealed, nav closed,
    /// the menu unfiltered, the first testimonial current, the form idle.
    #[must_use]
    pub fn new() -> Self {
        let mut reveal = RevealTracker::new();
        for section in SectionId::ALL {
            if let Some(threshold) = section.reveal_threshold() {
                reveal.track(section, threshold);
            }
        }

        let mut categories = Vec::with_capacity(4);
        categories.push(content::ALL_CATEGORIES);
        categories.extend(distinct(content::MENU_ITEMS.iter().map(|item| item.category)));

        Self {
            scroll: ScrollSignal::new(),
            reveal,
            hero: hero::rig(),
            stagger: StaggerTiming::default(),
            nav_open: false,
            categories,
            active_category: 0,
            menu: SelectionSet::new(content::MENU_ITEMS),
            testimonials: SelectionSet::new(content::TESTIMONIALS),
            form: EnquiryForm::new(),
        }
    }

    /// Applies one inbound event and reports which derived state it touched.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] for [`Event::SelectCategory`] and
    /// [`Event::JumpToTestimonial`] indices outside their respective ranges.
    /// Indices derive from the same lengths this page maintains, so an error
    /// here means the host's indicators are out of sync with its state.
    pub fn apply(&mut self, event: Event) -> Result<Changes, OutOfRangeError> {
        let mut changes = Changes::empty();
        match event {
            Event::Scroll { offset_px } => {
                self.scroll.publish(offset_px);
                if self.scroll.commit().is_some() {
                    changes |= Changes::SCROLL;
                }
            }
            Event::SectionRatio { section, ratio } => {
                let before = self.reveal.revision();
                self.reveal.observe(&section, ratio);
                if self.reveal.revision() != before {
                    changes |= Changes::REVEAL;
                }
            }
            Event::ToggleNav => {
                self.nav_open = !self.nav_open;
                changes |= Changes::NAV;
            }
            Event::Navigate { section: _ } => {
                // The anchor scroll is the host's job; the page only folds
                // the mobile nav away.
                if self.nav_open {
                    self.nav_open = false;
                    changes |= Changes::NAV;
                }
            }
            Event::SelectCategory { index } => {
                if self.select_category(index)? {
                    changes |= Changes::MENU;
                }
            }
            Event::NextTestimonial => {
                let before = self.testimonials.revision();
                self.testimonials.next();
                if self.testimonials.revision() != before {
                    changes |= Changes::TESTIMONIALS;
                }
            }
            Event::PreviousTestimonial => {
                let before = self.testimonials.revision();
                self.testimonials.previous();
                if self.testimonials.revision() != before {
                    changes |= Changes::TESTIMONIALS;
                }
            }
            Event::JumpToTestimonial { index } => {
                let before = self.testimonials.revision();
                self.testimonials.jump_to(index)?;
                if self.testimonials.revision() != before {
                    changes |= Changes::TESTIMONIALS;
                }
            }
            Event::FieldChanged { field, value } => {
                let before = self.form.revision();
                self.form.set_field(field, value);
                if self.form.revision() != before {
                    changes |= Changes::FORM;
                }
            }
            Event::Submit => {
                let before = self.form.revision();
                self.form.submit();
                if self.form.revision() != before {
                    changes |= Changes::FORM;
                }
            }
            Event::Tick { now } => {
                if self.form.advance(now) {
                    changes |= Changes::FORM;
                }
            }
        }
        Ok(changes)
    }

    fn select_category(&mut self, index: usize) -> Result<bool, OutOfRangeError> {
        if index >= self.categories.len() {
            return Err(OutOfRangeError {
                index,
                len: self.categories.len(),
            });
        }
        let before = self.menu.revision();
        if index == 0 {
            self.menu.clear_filter();
        } else {
            let category = self.categories[index];
            self.menu.set_filter(|item| item.category == category);
        }
        let filtered = self.menu.revision() != before;
        let switched = self.active_category != index;
        self.active_category = index;
        Ok(filtered || switched)
    }

    /// The committed scroll offset in pixels.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    /// Whether a section has played (or is playing) its enter transition.
    ///
    /// Sections without a reveal threshold are always treated as revealed.
    #[must_use]
    pub fn is_revealed(&self, section: SectionId) -> bool {
        section.reveal_threshold().is_none() || self.reveal.is_revealed(&section)
    }

    /// Sections whose intersection observations should remain connected.
    pub fn sections_needing_observation(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.reveal.pending().copied()
    }

    /// The enter-transition delay for a revealed section's `index`-th child.
    #[must_use]
    pub fn reveal_delay(&self, index: usize) -> u64 {
        self.stagger.delay_for(index)
    }

    /// The hero's layer states at the committed scroll offset, in the layer
    /// order documented by [`crate::hero`].
    pub fn hero_layers(&self) -> impl Iterator<Item = LayerState> + '_ {
        self.hero.states(self.scroll.offset())
    }

    /// Whether the mobile nav is open.
    #[must_use]
    pub fn nav_open(&self) -> bool {
        self.nav_open
    }

    /// The menu's category chips: `"All"` followed by each category in
    /// first-appearance order.
    #[must_use]
    pub fn categories(&self) -> &[&'static str] {
        &self.categories
    }

    /// The active category chip's index; 0 is `"All"`.
    #[must_use]
    pub fn active_category(&self) -> usize {
        self.active_category
    }

    /// The menu selection: its visible items are the filtered grid.
    #[must_use]
    pub fn menu(&self) -> &SelectionSet<MenuItem> {
        &self.menu
    }

    /// The testimonial selection: its cursor is the carousel position.
    #[must_use]
    pub fn testimonials(&self) -> &SelectionSet<Testimonial> {
        &self.testimonials
    }

    /// The enquiry form.
    #[must_use]
    pub fn form(&self) -> &EnquiryForm {
        &self.form
    }

    /// Snapshot of the page's derived state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PageDebugInfo {
        PageDebugInfo {
            scroll_offset: self.scroll.offset(),
            revealed: SectionId::ALL
                .into_iter()
                .filter(|&s| self.is_revealed(s))
                .collect(),
            nav_open: self.nav_open,
            active_category: self.categories[self.active_category],
            visible_menu_items: self.menu.visible_len(),
            testimonial_index: self.testimonials.current_index(),
            form_status: self.form.status(),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug snapshot of a [`Page`]'s derived state.
#[derive(Clone, Debug)]
pub struct PageDebugInfo {
    /// Committed scroll offset in pixels.
    pub scroll_offset: f64,
    /// Sections currently treated as revealed, in scroll order.
    pub revealed: Vec<SectionId>,
    /// Whether the mobile nav is open.
    pub nav_open: bool,
    /// Label of the active category chip.
    pub active_category: &'static str,
    /// Number of menu items surviving the active filter.
    pub visible_menu_items: usize,
    /// Carousel cursor within the testimonials, if any are visible.
    pub testimonial_index: Option<usize>,
    /// Where the enquiry form's submission stands.
    pub form_status: SubmissionStatus,
}
