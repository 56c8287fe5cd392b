// Copyright 2025 the Promenade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Promenade demos.

use promenade_page::{Changes, Event, Page};

/// Prints a banner line for one phase of a scripted session.
pub fn banner(title: &str) {
    println!();
    println!("==== {title} ====");
}

/// Applies `event` to `page`, printing the event and the change mask.
///
/// Index-carrying events are scripted with valid indices, so application
/// errors here are demo bugs and panic loudly.
pub fn step(page: &mut Page, event: Event) -> Changes {
    let label = format!("{event:?}");
    let changes = page.apply(event).expect("scripted event must be valid");
    if changes.is_empty() {
        println!("  {label:<60} (absorbed)");
    } else {
        println!("  {label:<60} -> {changes:?}");
    }
    changes
}
