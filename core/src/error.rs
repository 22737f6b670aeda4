// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised while parsing user input into calendar values.
///
/// Calendar operations themselves never fail; these only come from the edges
/// where strings are turned into dates, months, weekdays, colors or timezones.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A date that is not in `YYYY-MM-DD` form or does not exist.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// A month that is not in `YYYY-MM` form, does not exist, or cannot be
    /// displayed.
    #[error("invalid month '{0}', expected YYYY-MM within the supported date range")]
    InvalidMonth(String),

    /// A month moved by `shift` months onto a grid outside the supported date
    /// range.
    #[error("month {month} moved by {shift} months leaves the supported date range")]
    MonthOutOfRange { month: String, shift: i64 },

    /// An unknown weekday name.
    #[error("invalid weekday '{0}', expected a name such as 'sunday' or 'mon'")]
    InvalidWeekday(String),

    /// An unknown event color.
    #[error("invalid color '{0}', expected one of: {colors}", colors = crate::ColorTag::NAMES.join(", "))]
    InvalidColor(String),

    /// A timezone name missing from the IANA database.
    #[error("invalid timezone '{0}', expected an IANA name such as 'Europe/Berlin'")]
    InvalidTimezone(String),

    /// An event argument that cannot be split into date and title.
    #[error("invalid event '{0}', expected DATE:TITLE[:COLOR]")]
    InvalidEvent(String),
}
