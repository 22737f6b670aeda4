// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

use crate::Error;

/// NOTE: Used for JSON output and command-line input, so it should be stable.
pub(crate) const STABLE_FORMAT_DATE: &str = "%Y-%m-%d";

/// A calendar day without a time-of-day component.
///
/// Instants are turned into a `CalendarDate` by converting them into a timezone
/// first, see [`CalendarDate::from_instant`]. Two dates are equal iff they
/// name the same day, so every comparison in the grid is a calendar-day
/// comparison and never an elapsed-time one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from its parts, `None` if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The day the given instant falls on, as observed in `tz`.
    pub fn from_instant<Tz: TimeZone, Z: TimeZone>(instant: &DateTime<Tz>, tz: &Z) -> Self {
        Self(instant.with_timezone(tz).date_naive())
    }

    pub fn naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// The following day.
    ///
    /// # Panics
    ///
    /// Panics past the last date chrono can represent.
    pub fn succ(self) -> Self {
        Self(self.0.succ_opt().expect("date must be within chrono's supported range"))
    }

    /// The date `n` days earlier.
    ///
    /// # Panics
    ///
    /// Panics before the first date chrono can represent.
    pub fn sub_days(self, n: u64) -> Self {
        Self(
            self.0
                .checked_sub_days(Days::new(n))
                .expect("date must be within chrono's supported range"),
        )
    }

    /// The first day of the month this date belongs to.
    pub fn first_of_month(self) -> Self {
        Self(self.0.with_day(1).expect("day 1 exists in every month"))
    }

    /// The first day of the week containing this date, for weeks starting on
    /// `first_day_of_week`. Returns `self` when it already is that weekday.
    pub fn start_of_week(self, first_day_of_week: Weekday) -> Self {
        let offset = days_between(first_day_of_week, self.weekday());
        self.sub_days(u64::from(offset))
    }

    /// Shifts the date by whole calendar months.
    ///
    /// The day of month is clamped to the last day of the target month, so
    /// Jan 31 plus one month is Feb 29 in a leap year and Feb 28 otherwise.
    ///
    /// # Panics
    ///
    /// Panics when the result leaves chrono's supported range.
    pub fn add_months(self, months: i32) -> Self {
        self.checked_add_months(months)
            .expect("date must be within chrono's supported range")
    }

    /// Like [`CalendarDate::add_months`], `None` when the result leaves
    /// chrono's supported range.
    pub fn checked_add_months(self, months: i32) -> Option<Self> {
        let delta = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.0.checked_add_months(delta)
        } else {
            self.0.checked_sub_months(delta)
        };
        shifted.map(Self)
    }

    /// Whether both dates fall in the same month of the same year.
    pub fn is_same_month(self, other: Self) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(STABLE_FORMAT_DATE))
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), STABLE_FORMAT_DATE)
            .map(Self)
            .map_err(|_| Error::InvalidDate(s.to_string()))
    }
}

/// Days to walk forward from `from` to reach `to`, in `0..7`.
fn days_between(from: Weekday, to: Weekday) -> u32 {
    (7 + to.num_days_from_monday() - from.num_days_from_monday()) % 7
}
