// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

use crate::{CalendarDate, Error};

/// The name of the application.
pub const APP_NAME: &str = "monthcal";

/// Calendar configuration shared by the grid, the cursor and the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct CalendarConfig {
    /// The weekday each displayed week starts on.
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: Weekday,

    /// The timezone used to decide which day an instant falls on.
    #[serde(default = "system_timezone")]
    pub timezone: Tz,
}

impl CalendarConfig {
    pub fn new(first_day_of_week: Weekday, timezone: Tz) -> Self {
        Self {
            first_day_of_week,
            timezone,
        }
    }

    /// The current day in the configured timezone.
    pub fn today(&self) -> CalendarDate {
        self.normalize(&Utc::now())
    }

    /// The day an instant falls on in the configured timezone.
    pub fn normalize<Z: TimeZone>(&self, instant: &DateTime<Z>) -> CalendarDate {
        CalendarDate::from_instant(instant, &self.timezone)
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::new(default_first_day_of_week(), system_timezone())
    }
}

fn default_first_day_of_week() -> Weekday {
    Weekday::Sun
}

/// The timezone of the host system, UTC when it cannot be determined.
pub fn system_timezone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(name) => parse_timezone(&name).unwrap_or_else(|e| {
            tracing::warn!(%e, "unknown system timezone, falling back to UTC");
            Tz::UTC
        }),
        Err(e) => {
            tracing::warn!(%e, "failed to get system timezone, falling back to UTC");
            Tz::UTC
        }
    }
}

/// Parse an IANA timezone name such as `Europe/Berlin`.
pub fn parse_timezone(s: &str) -> Result<Tz, Error> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| Error::InvalidTimezone(s.to_string()))
}

/// Parse a weekday from its full or three-letter name, case-insensitively.
pub fn parse_weekday(s: &str) -> Result<Weekday, Error> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| Error::InvalidWeekday(s.to_string()))
}
