// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use clap::{Arg, ArgMatches, arg, value_parser};
use monthcal_core::{CalendarDate, ColorTag, Error};

/// The output format for commands
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
}

impl OutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

/// An event given on the command line as `DATE:TITLE[:COLOR]`.
///
/// The title may itself contain colons; only a trailing segment naming a
/// known color is taken as the color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSpec {
    pub date: CalendarDate,
    pub title: String,
    pub color: ColorTag,
}

impl FromStr for EventSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date, rest) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidEvent(s.to_string()))?;
        let date = date.parse()?;

        let (title, color) = match rest.rsplit_once(':') {
            Some((title, color)) => match color.parse() {
                Ok(color) => (title, color),
                Err(_) => (rest, ColorTag::default()),
            },
            None => (rest, ColorTag::default()),
        };

        Ok(Self {
            date,
            title: title.to_string(),
            color,
        })
    }
}
