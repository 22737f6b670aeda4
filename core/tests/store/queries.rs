// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use monthcal_core::{ColorTag, EventStore};
use uuid::Uuid;

use crate::common::{date, store_with};

#[test]
fn dentist_is_found_on_its_day_only() {
    let mut store = EventStore::new();
    let event = store
        .add("Dentist", date(2024, 3, 15), ColorTag::Blue)
        .unwrap();

    assert_eq!(store.events_on(date(2024, 3, 15)), vec![&event]);
    assert!(store.events_on(date(2024, 3, 16)).is_empty());
}

#[test]
fn whitespace_title_leaves_count_unchanged() {
    let mut store = store_with(&[("Dentist", date(2024, 3, 15))]);
    assert!(store.add("   ", date(2024, 3, 15), ColorTag::Blue).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn removing_unknown_id_leaves_store_unchanged() {
    let mut store = store_with(&[("Dentist", date(2024, 3, 15)), ("Lunch", date(2024, 3, 16))]);
    let before: Vec<_> = store.iter().cloned().collect();

    assert!(store.remove(Uuid::new_v4()).is_none());
    let after: Vec<_> = store.iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn removing_twice_is_a_noop_the_second_time() {
    let mut store = EventStore::new();
    let event = store.add("Once", date(2024, 3, 15), ColorTag::Orange).unwrap();
    assert!(store.remove(event.id()).is_some());
    assert!(store.remove(event.id()).is_none());
    assert!(store.is_empty());
}

#[test]
fn events_keep_their_color() {
    let mut store = EventStore::new();
    for color in ColorTag::ALL {
        store.add(color.as_ref(), date(2024, 3, 15), color).unwrap();
    }
    let colors: Vec<_> = store
        .events_on(date(2024, 3, 15))
        .iter()
        .map(|e| e.color())
        .collect();
    assert_eq!(colors, ColorTag::ALL);
}
