// Copyright 2025 the Promenade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hero's parallax layer stack.
//!
//! Layer order is fixed; the `*_LAYER` constants index into the rig (and
//! into [`crate::Page::hero_layers`]). The first five layers are the hero's
//! typographic elements, followed by one layer per dish card. Rates are
//! tuned against millisecond-frame scrolling on a desktop viewport; they are
//! plain data, so hosts that want a different feel build their own rig.

use promenade_parallax::{ParallaxLayer, ParallaxRig, Ramp};

use crate::content;

/// Background display typography, drifting slowly with the scroll.
pub const TITLE_LAYER: usize = 0;
/// Small eyebrow line above the heading; rises and fades to half.
pub const EYEBROW_LAYER: usize = 1;
/// Main heading; rises a little slower than the eyebrow, same fade.
pub const HEADING_LAYER: usize = 2;
/// Lede paragraph; stays put but fades further, to 0.3.
pub const LEDE_LAYER: usize = 3;
/// Scroll hint in the corner; fades out completely.
pub const SCROLL_HINT_LAYER: usize = 4;
/// First dish-card layer; one layer per card in [`content::DISH_CARDS`].
pub const CARD_LAYERS: usize = 5;

/// Builds the hero rig in layer order.
#[must_use]
pub fn rig() -> ParallaxRig {
    let mut rig = ParallaxRig::new();
    rig.push(ParallaxLayer::new(0.1));
    rig.push(ParallaxLayer::new(-0.05).with_fade(0.002, 0.5));
    rig.push(ParallaxLayer::new(-0.03).with_fade(0.002, 0.5));
    rig.push(ParallaxLayer::new(0.0).with_fade(0.002, 0.3));
    rig.push(ParallaxLayer::new(0.0).with_fade(0.003, 0.0));

    // Deeper cards drift and tilt more per scrolled pixel.
    let cards = ParallaxRig::ladder(
        content::DISH_CARDS.len(),
        Ramp::new(0.1, 0.05),
        Ramp::new(0.02, 0.01),
    );
    for layer in cards.layers() {
        rig.push(*layer);
    }
    rig
}
