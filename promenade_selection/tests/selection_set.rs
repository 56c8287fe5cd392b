// Copyright 2025 the Promenade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `promenade_selection` crate.
//!
//! These exercise the `SelectionSet<T>` navigation contract: wraparound
//! stepping, wholesale filter replacement, jump validation, and how the
//! revision counter tracks semantic change.

use promenade_selection::{OutOfRangeError, SelectionSet, distinct};

#[test]
fn empty_set_basics() {
    let set = SelectionSet::<u32>::new([]);
    assert!(set.is_empty());
    assert_eq!(set.visible_len(), 0);
    assert_eq!(set.total_len(), 0);
    assert_eq!(set.current(), None);
    assert_eq!(set.current_index(), None);
    assert_eq!(set.revision(), 0);
}

#[test]
fn navigation_on_empty_set_is_a_noop() {
    let mut set = SelectionSet::<u32>::new([]);
    set.next();
    set.previous();
    assert_eq!(set.current(), None);
    assert_eq!(set.revision(), 0);
    assert_eq!(set.jump_to(0), Err(OutOfRangeError { index: 0, len: 0 }));
}

#[test]
fn next_wraps_forward_and_previous_wraps_backward() {
    let mut set = SelectionSet::new(['a', 'b', 'c']);

    set.next();
    set.next();
    assert_eq!(set.current_index(), Some(2));

    set.next();
    assert_eq!(set.current_index(), Some(0));

    set.previous();
    assert_eq!(set.current_index(), Some(2));
}

#[test]
fn n_steps_return_to_origin() {
    let items: Vec<u32> = (0..7).collect();
    let n = items.len();

    let mut set = SelectionSet::new(items.clone());
    set.jump_to(3).unwrap();
    for _ in 0..n {
        set.next();
    }
    assert_eq!(set.current_index(), Some(3));

    for _ in 0..n {
        set.previous();
    }
    assert_eq!(set.current_index(), Some(3));
}

#[test]
fn single_item_set_stays_put_without_revision_noise() {
    let mut set = SelectionSet::new(["only"]);
    let rev = set.revision();
    set.next();
    set.previous();
    assert_eq!(set.current(), Some(&"only"));
    assert_eq!(set.revision(), rev);
}

#[test]
fn filter_recomputes_visible_and_resets_cursor() {
    let mut menu = SelectionSet::new([
        ("Foie Gras", "Starters"),
        ("Beef Wellington", "Mains"),
        ("Tuna Tartare", "Starters"),
        ("Chocolate Sphere", "Desserts"),
    ]);
    menu.jump_to(2).unwrap();

    menu.set_filter(|&(_, category)| category == "Starters");
    assert_eq!(menu.visible_len(), 2);
    assert_eq!(menu.current_index(), Some(0));
    assert_eq!(menu.current(), Some(&("Foie Gras", "Starters")));

    let starters: Vec<&str> = menu.visible().map(|&(name, _)| name).collect();
    assert_eq!(starters, ["Foie Gras", "Tuna Tartare"]);

    // The underlying sequence is untouched.
    assert_eq!(menu.total_len(), 4);
}

#[test]
fn emptying_filter_is_safe_and_refilter_recovers() {
    let mut set = SelectionSet::new([1, 2, 3]);

    set.set_filter(|_| false);
    assert!(set.is_empty());
    assert_eq!(set.current(), None);
    set.next();
    set.previous();
    assert_eq!(set.current(), None);

    set.set_filter(|&n| n > 1);
    assert_eq!(set.visible_len(), 2);
    assert_eq!(set.current_index(), Some(0));
    assert_eq!(set.current(), Some(&2));
}

#[test]
fn clear_filter_restores_all_items() {
    let mut set = SelectionSet::new([10, 20, 30]);
    set.set_filter(|&n| n == 20);
    assert_eq!(set.visible_len(), 1);

    set.clear_filter();
    assert_eq!(set.visible_len(), 3);
    assert_eq!(set.current(), Some(&10));
}

#[test]
fn jump_to_validates_against_visible_length() {
    let mut set = SelectionSet::new(['a', 'b', 'c', 'd']);

    assert_eq!(set.jump_to(0), Ok(()));
    assert_eq!(set.jump_to(3), Ok(()));
    assert_eq!(set.jump_to(4), Err(OutOfRangeError { index: 4, len: 4 }));

    // After filtering, the bound tightens to the visible length.
    set.set_filter(|&c| c < 'c');
    assert_eq!(set.jump_to(1), Ok(()));
    assert_eq!(set.jump_to(2), Err(OutOfRangeError { index: 2, len: 2 }));
}

#[test]
fn out_of_range_error_formats_both_fields() {
    let err = OutOfRangeError { index: 5, len: 3 };
    let text = std::format!("{err}");
    assert!(text.contains('5'), "missing index in: {text}");
    assert!(text.contains('3'), "missing length in: {text}");
}

#[test]
fn revision_bumps_only_on_semantic_change() {
    let mut set = SelectionSet::new([1, 2, 3]);
    let rev0 = set.revision();

    set.next();
    let rev1 = set.revision();
    assert!(rev1 > rev0);

    // Jumping to the current cursor is a no-op.
    set.jump_to(1).unwrap();
    assert_eq!(set.revision(), rev1);

    // Applying a filter equivalent to the current view while at cursor 0
    // is also a no-op.
    set.jump_to(0).unwrap();
    let rev2 = set.revision();
    set.set_filter(|_| true);
    assert_eq!(set.revision(), rev2);
}

#[test]
fn distinct_keeps_first_occurrence_order() {
    let categories = distinct(["Starters", "Mains", "Starters", "Desserts"]);
    assert_eq!(categories, ["Starters", "Mains", "Desserts"]);

    let empty: Vec<u32> = distinct([]);
    assert!(empty.is_empty());
}

#[cfg(feature = "hashbrown")]
#[test]
fn distinct_hashed_matches_distinct() {
    use promenade_selection::distinct_hashed;

    let input = ["a", "b", "a", "c", "b", "a"];
    assert_eq!(distinct(input), distinct_hashed(input));
}
