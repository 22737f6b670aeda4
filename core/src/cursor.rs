// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use chrono::{Days, NaiveDate};
use serde::{Serialize, Serializer};

use crate::{CalendarDate, DAYS_PER_WEEK, Error, GRID_DAYS};

/// The currently displayed month, held as any day within it.
///
/// Stepping moves by whole calendar months. The day of month is clamped to
/// the end of shorter months, so stepping forward and back always lands in
/// the original month but not always on the original day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    anchor: CalendarDate,
}

impl MonthCursor {
    pub fn new(anchor: CalendarDate) -> Self {
        Self { anchor }
    }

    /// The day the cursor is held at.
    pub fn anchor(&self) -> CalendarDate {
        self.anchor
    }

    /// The first day of the displayed month.
    pub fn first_day(&self) -> CalendarDate {
        self.anchor.first_of_month()
    }

    pub fn year(&self) -> i32 {
        self.anchor.year()
    }

    pub fn month(&self) -> u32 {
        self.anchor.month()
    }

    /// Whether the date belongs to the displayed month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.anchor.is_same_month(date)
    }

    pub fn next_month(&mut self) {
        self.shift(1);
    }

    pub fn previous_month(&mut self) {
        self.shift(-1);
    }

    /// Move by `months` calendar months, backwards when negative.
    pub fn shift(&mut self, months: i32) {
        self.anchor = self.anchor.add_months(months);
    }

    /// Like [`MonthCursor::shift`], `None` when the target month cannot be
    /// displayed.
    pub fn checked_shift(self, months: i32) -> Option<Self> {
        let anchor = self.anchor.checked_add_months(months)?;
        Some(Self::new(anchor)).filter(Self::is_displayable)
    }

    /// Whether every day of this month's grid lies within chrono's supported
    /// range. The grid starts at most six days before the first of the month.
    pub fn is_displayable(&self) -> bool {
        let first = self.first_day().naive();
        let lead = Days::new((DAYS_PER_WEEK - 1) as u64);
        let span = Days::new((GRID_DAYS - 1) as u64);
        first.checked_sub_days(lead).is_some() && first.checked_add_days(span).is_some()
    }

    /// Human-readable title such as "March 2024".
    pub fn title(&self) -> String {
        self.anchor.naive().format("%B %Y").to_string()
    }
}

impl From<CalendarDate> for MonthCursor {
    fn from(anchor: CalendarDate) -> Self {
        Self::new(anchor)
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl Serialize for MonthCursor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for MonthCursor {
    type Err = Error;

    /// Parse `YYYY-MM` into a cursor anchored at the first of that month.
    ///
    /// Months whose grid would leave the supported date range are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| Self::new(d.into()))
            .filter(Self::is_displayable)
            .ok_or_else(invalid)
    }
}
