// Copyright 2025 the Promenade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=promenade_parallax --heading-base-level=0

//! Promenade Parallax: pure scroll-to-layer state mapping.
//!
//! A parallax hero stacks several visual layers over one scroll source and
//! moves each at its own rate; slower layers read as further away. The whole
//! effect reduces to three per-layer formulas over the current scroll offset:
//!
//! - `offset_px = scroll_offset_px * sensitivity`
//! - `rotation_deg = scroll_offset_px * rotate_rate`
//! - `opacity = clamp(1 - scroll_offset_px * fade_rate, min_opacity, max_opacity)`
//!
//! [`ParallaxLayer`] holds the per-layer constants and [`ParallaxLayer::state`]
//! evaluates them. The mapping is a pure function: no hidden state, identical
//! inputs give identical outputs, and opacity stays inside its clamp range for
//! arbitrarily large offsets, so a page that scrolls forever never fades past
//! its floor. Layers never read each other; [`ParallaxRig`] is only a
//! convenience for evaluating an ordered stack against one offset.
//!
//! ## Minimal example
//!
//! ```rust
//! use promenade_parallax::ParallaxLayer;
//!
//! // A background title that drifts down slowly and never fades.
//! let title = ParallaxLayer::new(0.1);
//! let state = title.state(400.0);
//! assert_eq!(state.offset_px, 40.0);
//! assert_eq!(state.opacity, 1.0);
//!
//! // Foreground copy that rises and fades toward half strength.
//! let copy = ParallaxLayer::new(-0.05).with_fade(0.002, 0.5);
//! let state = copy.state(400.0);
//! assert_eq!(state.offset_px, -20.0);
//! assert_eq!(state.opacity, 0.5); // clamped at the floor
//! ```
//!
//! This crate is `no_std`; enable the `libm` feature for `no_std` targets
//! (it forwards to Kurbo's math fallback, used by [`ParallaxLayer::transform`]).

#![no_std]

extern crate alloc;

mod rig;

pub use rig::{ParallaxRig, Ramp};

use kurbo::Affine;

/// Static configuration for one parallax layer.
///
/// All rates are per scrolled pixel: `sensitivity` in offset pixels,
/// `rotate_rate` in degrees, `fade_rate` in opacity. Negative sensitivities
/// move the layer against the scroll direction, which is how foreground
/// elements are made to feel closer than the page itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    /// Offset pixels gained per scrolled pixel.
    pub sensitivity: f64,
    /// Degrees of rotation gained per scrolled pixel.
    pub rotate_rate: f64,
    /// Opacity lost per scrolled pixel.
    pub fade_rate: f64,
    /// Lower opacity bound.
    pub min_opacity: f64,
    /// Upper opacity bound.
    pub max_opacity: f64,
}

/// Derived per-layer presentation state; computed, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerState {
    /// Offset along the scroll axis, in pixels.
    pub offset_px: f64,
    /// Rotation in degrees.
    pub rotation_deg: f64,
    /// Opacity inside the layer's clamp range.
    pub opacity: f64,
}

impl ParallaxLayer {
    /// Creates a layer that translates at `sensitivity` and never fades.
    #[must_use]
    pub const fn new(sensitivity: f64) -> Self {
        Self {
            sensitivity,
            rotate_rate: 0.0,
            fade_rate: 0.0,
            min_opacity: 0.0,
            max_opacity: 1.0,
        }
    }

    /// Adds a fade: `fade_rate` opacity lost per pixel, floored at `min_opacity`.
    #[must_use]
    pub const fn with_fade(mut self, fade_rate: f64, min_opacity: f64) -> Self {
        self.fade_rate = fade_rate;
        self.min_opacity = min_opacity;
        self
    }

    /// Sets the full opacity clamp range.
    ///
    /// The bounds are normalized so that `min <= max`.
    #[must_use]
    pub fn with_opacity_range(mut self, min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_opacity = min;
        self.max_opacity = max;
        self
    }

    /// Adds a rotation of `rotate_rate` degrees per scrolled pixel.
    #[must_use]
    pub const fn with_rotation(mut self, rotate_rate: f64) -> Self {
        self.rotate_rate = rotate_rate;
        self
    }

    /// Evaluates the layer against a scroll offset.
    ///
    /// Pure: identical `(self, scroll_offset_px)` inputs yield bit-identical
    /// outputs. Opacity never leaves `[min_opacity, max_opacity]`, however
    /// large the offset.
    #[must_use]
    pub fn state(&self, scroll_offset_px: f64) -> LayerState {
        LayerState {
            offset_px: scroll_offset_px * self.sensitivity,
            rotation_deg: scroll_offset_px * self.rotate_rate,
            opacity: (1.0 - scroll_offset_px * self.fade_rate)
                .clamp(self.min_opacity, self.max_opacity),
        }
    }

    /// Evaluates the layer as a ready-to-apply affine transform.
    ///
    /// The transform translates along the scroll axis and then rotates about
    /// the layer's own origin. Opacity is not representable in an affine;
    /// read it from [`ParallaxLayer::state`].
    #[must_use]
    pub fn transform(&self, scroll_offset_px: f64) -> Affine {
        let state = self.state(scroll_offset_px);
        Affine::translate((0.0, state.offset_px)) * Affine::rotate(state.rotation_deg.to_radians())
    }
}
