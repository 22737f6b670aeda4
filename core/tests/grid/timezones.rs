// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{TimeZone, Utc, Weekday};
use chrono_tz::{America::New_York, Australia::Sydney, Europe::Berlin, Pacific::Apia};
use monthcal_core::{CalendarDate, EventStore, generate_grid};

use crate::common::{assert_grid_shape, config_in, date};

#[test]
fn dst_start_month_keeps_consecutive_days() {
    // New York springs forward on 2024-03-10
    let store = EventStore::new();
    let config = config_in(Weekday::Sun, New_York);
    let grid = generate_grid(date(2024, 3, 1), date(2024, 3, 10), None, &store, &config);

    assert_grid_shape(&grid, &config);
    let cell = grid.cell(date(2024, 3, 10)).unwrap();
    assert!(cell.is_today);
    assert_eq!(grid.cell(date(2024, 3, 11)).unwrap().date, date(2024, 3, 11));
}

#[test]
fn dst_end_month_keeps_consecutive_days() {
    // Berlin falls back on 2024-10-27
    let store = EventStore::new();
    let config = config_in(Weekday::Mon, Berlin);
    let grid = generate_grid(date(2024, 10, 1), date(2024, 10, 27), None, &store, &config);

    assert_grid_shape(&grid, &config);
    let dates: Vec<_> = grid.cells().iter().map(|c| c.date.to_string()).collect();
    assert!(dates.windows(2).any(|w| w == ["2024-10-27", "2024-10-28"]));
}

#[test]
fn southern_hemisphere_dst_months_are_well_formed() {
    // Sydney leaves DST in April and enters it in October
    let store = EventStore::new();
    let config = config_in(Weekday::Sun, Sydney);
    for month in [4, 10] {
        let grid = generate_grid(date(2024, month, 1), date(2024, month, 1), None, &store, &config);
        assert_grid_shape(&grid, &config);
    }
}

#[test]
fn skipped_calendar_day_still_gets_a_cell() {
    // Samoa skipped 2011-12-30 entirely; grid days are calendar days, so it is still drawn
    let store = EventStore::new();
    let config = config_in(Weekday::Sun, Apia);
    let grid = generate_grid(date(2011, 12, 1), date(2011, 12, 31), None, &store, &config);

    assert_grid_shape(&grid, &config);
    assert!(grid.cell(date(2011, 12, 30)).is_some());
}

#[test]
fn today_is_normalized_in_the_configured_timezone() {
    // 2024-03-31 23:30 UTC is April 1st in Berlin
    let store = EventStore::new();
    let instant = Utc.with_ymd_and_hms(2024, 3, 31, 23, 30, 0).unwrap();
    let berlin = config_in(Weekday::Sun, Berlin);
    let today = berlin.normalize(&instant);
    assert_eq!(today, date(2024, 4, 1));

    let grid = generate_grid(date(2024, 3, 1), today, None, &store, &berlin);
    assert!(grid.cell(date(2024, 4, 1)).unwrap().is_today);
    assert!(!grid.cell(date(2024, 3, 31)).unwrap().is_today);

    let new_york = config_in(Weekday::Sun, New_York);
    assert_eq!(new_york.normalize(&instant), date(2024, 3, 31));
}

#[test]
fn event_dates_from_instants_match_grid_days() {
    let instant = New_York.with_ymd_and_hms(2024, 11, 3, 1, 30, 0).earliest().unwrap();
    let day = CalendarDate::from_instant(&instant, &New_York);
    assert_eq!(day, date(2024, 11, 3));
}
