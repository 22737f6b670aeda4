// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use chrono::Weekday;
use chrono_tz::Tz;
use monthcal_core::{CalendarConfig, CalendarDate, ColorTag, EventStore};

/// Shorthand for a date that is known to exist.
///
/// # Panics
///
/// Panics if the date does not exist.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day)
        .unwrap_or_else(|| panic!("{year:04}-{month:02}-{day:02} should exist"))
}

/// A UTC configuration with weeks starting on Sunday.
#[must_use]
pub fn sunday_first() -> CalendarConfig {
    config_in(Weekday::Sun, Tz::UTC)
}

/// A UTC configuration with weeks starting on Monday.
#[must_use]
pub fn monday_first() -> CalendarConfig {
    config_in(Weekday::Mon, Tz::UTC)
}

#[must_use]
pub fn config_in(first_day_of_week: Weekday, timezone: Tz) -> CalendarConfig {
    CalendarConfig::new(first_day_of_week, timezone)
}

/// Creates a store holding one blue event per `(title, date)` pair, in order.
///
/// # Example
///
/// ```ignore
/// let store = store_with(&[("Dentist", date(2024, 3, 15))]);
/// ```
#[must_use]
pub fn store_with(events: &[(&str, CalendarDate)]) -> EventStore {
    let mut store = EventStore::new();
    for (title, date) in events {
        store
            .add(title, *date, ColorTag::Blue)
            .expect("fixture titles should not be blank");
    }
    store
}
