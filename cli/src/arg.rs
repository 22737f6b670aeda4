// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Weekday;
use chrono_tz::Tz;
use clap::{Arg, ArgAction, ArgMatches, arg, value_parser};
use monthcal_core::{CalendarDate, MonthCursor, parse_timezone, parse_weekday};

use crate::util::EventSpec;

/// Upper bound for `--next` and `--prev`, a thousand years.
const MAX_MONTH_STEPS: i64 = 12_000;

#[derive(Debug, Clone, Copy)]
pub struct MonthArgs;

impl MonthArgs {
    pub fn month() -> Arg {
        arg!(month: [MONTH] "Month to display as YYYY-MM, defaults to the month of today")
            .value_parser(value_parser!(MonthCursor))
    }

    pub fn get_month(matches: &ArgMatches) -> Option<MonthCursor> {
        matches.get_one("month").copied()
    }

    pub fn today() -> Arg {
        arg!(--today <DATE> "Override today's date, as YYYY-MM-DD")
            .value_parser(value_parser!(CalendarDate))
    }

    pub fn get_today(matches: &ArgMatches) -> Option<CalendarDate> {
        matches.get_one("today").copied()
    }

    pub fn select() -> Arg {
        arg!(-s --select <DATE> "Select a day and list its events, as YYYY-MM-DD")
            .value_parser(value_parser!(CalendarDate))
    }

    pub fn get_select(matches: &ArgMatches) -> Option<CalendarDate> {
        matches.get_one("select").copied()
    }

    pub fn event() -> Arg {
        arg!(-e --event <EVENT> "Add an event as DATE:TITLE[:COLOR], may be repeated")
            .value_parser(value_parser!(EventSpec))
            .action(ArgAction::Append)
    }

    pub fn get_events(matches: &ArgMatches) -> Vec<EventSpec> {
        matches
            .get_many::<EventSpec>("event")
            .map(|events| events.cloned().collect())
            .unwrap_or_default()
    }

    pub fn next() -> Arg {
        arg!(--next <N> "Move forward N months after setup")
            .value_parser(value_parser!(u32).range(..=MAX_MONTH_STEPS))
            .default_value("0")
    }

    pub fn prev() -> Arg {
        arg!(--prev <N> "Move back N months after setup")
            .value_parser(value_parser!(u32).range(..=MAX_MONTH_STEPS))
            .default_value("0")
    }

    /// Net number of months to move, forward when positive.
    pub fn get_shift(matches: &ArgMatches) -> i64 {
        let next = matches.get_one::<u32>("next").copied().unwrap_or(0);
        let prev = matches.get_one::<u32>("prev").copied().unwrap_or(0);
        i64::from(next) - i64::from(prev)
    }

    pub fn first_day() -> Arg {
        arg!(--"first-day" <DAY> "First day of the week, overrides the configuration")
            .value_parser(parse_weekday)
    }

    pub fn get_first_day(matches: &ArgMatches) -> Option<Weekday> {
        matches.get_one("first-day").copied()
    }

    pub fn timezone() -> Arg {
        arg!(--timezone <TZ> "IANA timezone used to find today, overrides the configuration")
            .value_parser(parse_timezone)
    }

    pub fn get_timezone(matches: &ArgMatches) -> Option<Tz> {
        matches.get_one("timezone").copied()
    }
}
