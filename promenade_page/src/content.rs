// Copyright 2025 the Promenade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page's fixed content: every record the sections render.
//!
//! All collections here are small `'static` tables, immutable for the life
//! of the page. Derived views (category chips, the current testimonial, the
//! visible menu subset) are computed by the page state, never stored here.

/// A dish card fanned out in the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DishCard {
    /// Dish name shown on the card face.
    pub name: &'static str,
    /// Card eyebrow label.
    pub category: &'static str,
    /// Provenance line under the name.
    pub origin: &'static str,
}

/// The hero's card fan, nearest last.
pub const DISH_CARDS: [DishCard; 4] = [
    DishCard {
        name: "Foie Gras",
        category: "Appetizer",
        origin: "French Classic",
    },
    DishCard {
        name: "Beef Wellington",
        category: "Main Course",
        origin: "British Classic",
    },
    DishCard {
        name: "Tuna Tartare",
        category: "Signature",
        origin: "Modern Fusion",
    },
    DishCard {
        name: "Chocolate Sphere",
        category: "Dessert",
        origin: "Patisserie Art",
    },
];

/// A navigation link in the fixed header and mobile nav.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Link label.
    pub label: &'static str,
    /// Section the link scrolls to.
    pub section: crate::SectionId,
}

/// Header navigation, in display order.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "About",
        section: crate::SectionId::About,
    },
    NavLink {
        label: "Menu",
        section: crate::SectionId::Menu,
    },
    NavLink {
        label: "Gallery",
        section: crate::SectionId::Gallery,
    },
    NavLink {
        label: "Contact",
        section: crate::SectionId::Contact,
    },
];

/// One step of the how-it-works walkthrough.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    /// Two-digit ordinal shown large.
    pub number: &'static str,
    /// First title line.
    pub title: &'static str,
    /// Second title line.
    pub subtitle: &'static str,
    /// Body copy.
    pub description: &'static str,
}

/// The four-step process walkthrough.
pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        number: "01",
        title: "Consultation",
        subtitle: "& Menu Planning",
        description: "We begin with a personal consultation to understand your vision, dietary preferences, and the occasion. Together, we craft a bespoke menu tailored to your desires.",
    },
    ProcessStep {
        number: "02",
        title: "Premium",
        subtitle: "Ingredients",
        description: "I source only the finest seasonal ingredients from trusted local suppliers and artisan producers. Quality is the foundation of every dish I create.",
    },
    ProcessStep {
        number: "03",
        title: "Crafted",
        subtitle: "with Passion",
        description: "Each dish is prepared with meticulous attention to detail, combining classical techniques with modern innovation to create unforgettable flavors.",
    },
    ProcessStep {
        number: "04",
        title: "Exquisite",
        subtitle: "Presentation",
        description: "The final touch is an artistic presentation that delights the eyes before the first bite. Every plate is a canvas, every meal a masterpiece.",
    },
];

/// A dish on the menu section's filterable grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    /// Dish name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Display price.
    pub price: &'static str,
    /// Category the filter chips match against.
    pub category: &'static str,
}

/// The menu grid, in display order.
pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem {
        name: "Pan-Seared Foie Gras",
        description: "With fig compote, brioche toast, and aged balsamic reduction",
        price: "€45",
        category: "Starters",
    },
    MenuItem {
        name: "Beef Wellington",
        description: "Prime fillet, mushroom duxelles, prosciutto, golden puff pastry",
        price: "€85",
        category: "Mains",
    },
    MenuItem {
        name: "Tuna Tartare",
        description: "Fresh yellowfin, avocado, sesame, wasabi emulsion",
        price: "€38",
        category: "Starters",
    },
    MenuItem {
        name: "Chocolate Sphere",
        description: "Valrhona dark chocolate, raspberry coulis, gold leaf",
        price: "€28",
        category: "Desserts",
    },
];

/// The label for the unfiltered menu view.
pub const ALL_CATEGORIES: &str = "All";

/// A shot in the gallery grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryShot {
    /// Asset path the host resolves.
    pub asset: &'static str,
    /// Caption shown on hover.
    pub caption: &'static str,
}

/// The gallery grid, in display order.
pub const GALLERY_SHOTS: [GalleryShot; 4] = [
    GalleryShot {
        asset: "/dish-lobster.jpg",
        caption: "Lobster Bisque",
    },
    GalleryShot {
        asset: "/dish-risotto.jpg",
        caption: "Truffle Risotto",
    },
    GalleryShot {
        asset: "/dish-scallops.jpg",
        caption: "Seared Scallops",
    },
    GalleryShot {
        asset: "/chef-portrait.jpg",
        caption: "Chef at Work",
    },
];

/// A client quote cycled by the testimonial carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    /// Client name.
    pub name: &'static str,
    /// Client role line.
    pub role: &'static str,
    /// Quote body.
    pub content: &'static str,
    /// Star rating out of five.
    pub rating: u8,
}

/// The testimonial carousel's fixed rotation.
pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Alexandra Mitchell",
        role: "Private Event Client",
        content: "An absolutely extraordinary experience. Chef transformed our anniversary dinner into an unforgettable culinary journey. Every dish was a masterpiece.",
        rating: 5,
    },
    Testimonial {
        name: "James Richardson",
        role: "Corporate Event Organizer",
        content: "Professional, creative, and incredibly talented. Our clients were amazed by the presentation and flavors. Highly recommend for any special occasion.",
        rating: 5,
    },
    Testimonial {
        name: "Sophie Laurent",
        role: "Food Critic",
        content: "Michelin-star quality in the comfort of your own home. The attention to detail and passion in every plate is truly remarkable.",
        rating: 5,
    },
];

/// A headline figure in the about section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChefStat {
    /// The figure itself.
    pub value: &'static str,
    /// What the figure counts.
    pub label: &'static str,
}

/// About-section stats row.
pub const CHEF_STATS: [ChefStat; 4] = [
    ChefStat {
        value: "20+",
        label: "Years Experience",
    },
    ChefStat {
        value: "500+",
        label: "Events Catered",
    },
    ChefStat {
        value: "3",
        label: "Michelin Stars",
    },
    ChefStat {
        value: "Paris",
        label: "Based In",
    },
];

/// About-section achievement list.
pub const ACHIEVEMENTS: [&str; 4] = [
    "Former Executive Chef at Le Meurice, Paris",
    "Michelin Star recipient for 3 consecutive years",
    "Graduate of Le Cordon Bleu, Paris",
    "Featured in Gourmet Magazine & Food & Wine",
];

/// Services offered, shown as chips and as the enquiry's event types.
pub const SERVICES: [&str; 6] = [
    "Private Dining",
    "Corporate Events",
    "Wedding Catering",
    "Cooking Classes",
    "Menu Consulting",
    "Pop-up Dinners",
];

/// A way to reach the chef, shown as a contact card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    /// Card label.
    pub label: &'static str,
    /// Displayed value.
    pub value: &'static str,
    /// Target the host links to.
    pub href: &'static str,
}

/// Contact cards, in display order.
pub const CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        label: "Email",
        value: "chef@gourmet.com",
        href: "mailto:chef@gourmet.com",
    },
    ContactChannel {
        label: "Phone",
        value: "+33 1 23 45 67 89",
        href: "tel:+33123456789",
    },
    ContactChannel {
        label: "Location",
        value: "Paris, France",
        href: "#",
    },
    ContactChannel {
        label: "Instagram",
        value: "@chef.gourmet",
        href: "https://instagram.com",
    },
];

/// A link in a footer column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    /// Link label.
    pub label: &'static str,
    /// Anchor or page the host links to.
    pub target: &'static str,
}

/// A titled footer column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterGroup {
    /// Column title.
    pub title: &'static str,
    /// Column links, in display order.
    pub links: &'static [FooterLink],
}

/// The footer's three link columns.
pub const FOOTER_GROUPS: [FooterGroup; 3] = [
    FooterGroup {
        title: "Navigation",
        links: &[
            FooterLink {
                label: "Home",
                target: "#",
            },
            FooterLink {
                label: "About",
                target: "#about",
            },
            FooterLink {
                label: "Menu",
                target: "#menu",
            },
            FooterLink {
                label: "Gallery",
                target: "#gallery",
            },
            FooterLink {
                label: "Contact",
                target: "#contact",
            },
        ],
    },
    FooterGroup {
        title: "Services",
        links: &[
            FooterLink {
                label: "Private Dining",
                target: "#contact",
            },
            FooterLink {
                label: "Corporate Events",
                target: "#contact",
            },
            FooterLink {
                label: "Wedding Catering",
                target: "#contact",
            },
            FooterLink {
                label: "Cooking Classes",
                target: "#contact",
            },
        ],
    },
    FooterGroup {
        title: "Legal",
        links: &[
            FooterLink {
                label: "Privacy Policy",
                target: "#",
            },
            FooterLink {
                label: "Terms of Service",
                target: "#",
            },
            FooterLink {
                label: "Cookie Policy",
                target: "#",
            },
        ],
    },
];
