// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use monthcal_core::{ColorTag, EventStore, generate_grid};

use crate::common::{assert_flag_count, date, store_with, sunday_first};

#[test]
fn today_is_flagged_once_inside_the_window() {
    let store = EventStore::new();
    let config = sunday_first();

    // Inside the month, in the leading days, and in the trailing days
    for today in [date(2024, 3, 15), date(2024, 2, 25), date(2024, 4, 6)] {
        let grid = generate_grid(date(2024, 3, 1), today, None, &store, &config);
        assert_flag_count(&grid, |c| c.is_today, 1);
        assert!(grid.cell(today).unwrap().is_today);
    }
}

#[test]
fn today_outside_the_window_flags_nothing() {
    let store = EventStore::new();
    let config = sunday_first();

    for today in [date(2024, 2, 24), date(2024, 4, 7), date(2025, 3, 15)] {
        let grid = generate_grid(date(2024, 3, 1), today, None, &store, &config);
        assert_flag_count(&grid, |c| c.is_today, 0);
    }
}

#[test]
fn selection_is_flagged_once_inside_the_window() {
    let store = EventStore::new();
    let config = sunday_first();
    let today = date(2024, 3, 15);

    let grid = generate_grid(date(2024, 3, 1), today, Some(date(2024, 4, 2)), &store, &config);
    assert_flag_count(&grid, |c| c.is_selected, 1);
    assert!(grid.cell(date(2024, 4, 2)).unwrap().is_selected);

    let grid = generate_grid(date(2024, 3, 1), today, Some(date(2024, 5, 2)), &store, &config);
    assert_flag_count(&grid, |c| c.is_selected, 0);

    let grid = generate_grid(date(2024, 3, 1), today, None, &store, &config);
    assert_flag_count(&grid, |c| c.is_selected, 0);
}

#[test]
fn today_and_selection_can_share_a_cell() {
    let store = EventStore::new();
    let config = sunday_first();
    let today = date(2024, 3, 15);
    let grid = generate_grid(date(2024, 3, 1), today, Some(today), &store, &config);

    let cell = grid.cell(today).unwrap();
    assert!(cell.is_today && cell.is_selected);
}

#[test]
fn events_attach_to_their_day_in_insertion_order() {
    let store = store_with(&[
        ("Dentist", date(2024, 3, 15)),
        ("Trailing", date(2024, 4, 3)),
        ("Lunch", date(2024, 3, 15)),
        ("Outside", date(2024, 4, 30)),
    ]);
    let config = sunday_first();
    let grid = generate_grid(date(2024, 3, 1), date(2024, 3, 15), None, &store, &config);

    let titles: Vec<_> = grid
        .cell(date(2024, 3, 15))
        .unwrap()
        .events
        .iter()
        .map(|e| e.title())
        .collect();
    assert_eq!(titles, ["Dentist", "Lunch"]);

    // Events in adjacent-month cells are attached too
    assert_eq!(grid.cell(date(2024, 4, 3)).unwrap().events.len(), 1);

    let attached: usize = grid.cells().iter().map(|c| c.events.len()).sum();
    assert_eq!(attached, 3);
}

#[test]
fn many_events_on_one_day_are_not_truncated() {
    let mut store = EventStore::new();
    for i in 0..10 {
        store.add(&format!("Event {i}"), date(2024, 3, 15), ColorTag::Green);
    }
    let config = sunday_first();
    let grid = generate_grid(date(2024, 3, 1), date(2024, 3, 15), None, &store, &config);
    assert_eq!(grid.cell(date(2024, 3, 15)).unwrap().events.len(), 10);
}

#[test]
fn identical_inputs_produce_identical_grids() {
    let store = store_with(&[("Dentist", date(2024, 3, 15))]);
    let config = sunday_first();
    let selected = Some(date(2024, 3, 20));

    let a = generate_grid(date(2024, 3, 1), date(2024, 3, 15), selected, &store, &config);
    let b = generate_grid(date(2024, 3, 1), date(2024, 3, 15), selected, &store, &config);
    assert_eq!(a, b);
}
