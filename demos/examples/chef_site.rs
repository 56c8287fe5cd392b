// Copyright 2025 the Promenade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted visit to the chef page, printed state by state.
//!
//! Runs the composed [`Page`] through a plausible session: load, scroll
//! through the hero, reveal sections, filter the menu, cycle testimonials,
//! and send an enquiry. Every derived view printed here is exactly what a
//! rendering host would read after the same events.
//!
//! ```sh
//! cargo run -p promenade_demos --example chef_site
//! ```

use promenade_demos::{banner, step};
use promenade_page::{Event, Field, Page, SectionId, content, hero};

fn main() {
    let mut page = Page::new();

    banner("Load");
    println!("  {:#?}", page.debug_info());
    println!(
        "  nav: {:?}",
        content::NAV_LINKS.map(|link| link.label)
    );

    banner("Scrolling through the hero");
    for offset in [150.0, 320.0, 500.0] {
        step(&mut page, Event::Scroll { offset_px: offset });
    }
    for (index, state) in page.hero_layers().enumerate() {
        let name = match index {
            hero::TITLE_LAYER => "title",
            hero::EYEBROW_LAYER => "eyebrow",
            hero::HEADING_LAYER => "heading",
            hero::LEDE_LAYER => "lede",
            hero::SCROLL_HINT_LAYER => "scroll hint",
            _ => "dish card",
        };
        println!(
            "  {name:<12} offset {:>7.1}px  rotation {:>5.2}deg  opacity {:.2}",
            state.offset_px, state.rotation_deg, state.opacity
        );
    }

    banner("Sections scrolling into view");
    for (section, ratio) in [
        (SectionId::HowItWorks, 0.25),
        (SectionId::Menu, 0.18),
        (SectionId::Gallery, 0.16),
    ] {
        step(&mut page, Event::SectionRatio { section, ratio });
    }
    println!(
        "  still observing: {:?}",
        page.sections_needing_observation().collect::<Vec<_>>()
    );
    for (index, process) in content::PROCESS_STEPS.iter().enumerate() {
        println!(
            "  step {} enters after {}ms",
            process.number,
            page.reveal_delay(index)
        );
    }

    banner("Filtering the menu");
    println!("  chips: {:?}", page.categories());
    let starters = page
        .categories()
        .iter()
        .position(|&c| c == "Starters")
        .expect("menu has starters");
    step(&mut page, Event::SelectCategory { index: starters });
    for item in page.menu().visible() {
        println!("  {:<24} {:>4}  {}", item.name, item.price, item.description);
    }
    step(&mut page, Event::SelectCategory { index: 0 });

    banner("Cycling testimonials");
    for _ in 0..3 {
        step(&mut page, Event::NextTestimonial);
        let quote = page.testimonials().current().expect("carousel is fixed");
        println!("    {} — {}", quote.name, quote.role);
    }
    step(&mut page, Event::PreviousTestimonial);

    banner("Sending an enquiry");
    for (field, value) in [
        (Field::Name, "Alexandra Mitchell"),
        (Field::Email, "alexandra@example.com"),
        (Field::EventType, "Private Dining"),
        (Field::Message, "An anniversary dinner for two, in June."),
    ] {
        step(
            &mut page,
            Event::FieldChanged {
                field,
                value: value.into(),
            },
        );
    }
    step(&mut page, Event::Submit);
    step(&mut page, Event::Tick { now: 1500 });
    step(&mut page, Event::Tick { now: 6500 });

    banner("Final state");
    println!("  {:#?}", page.debug_info());
}
