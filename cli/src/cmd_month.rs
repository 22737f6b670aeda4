// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::Weekday;
use chrono_tz::Tz;
use clap::{ArgMatches, Command};
use colored::Colorize;
use monthcal_core::{CalendarConfig, CalendarController, CalendarDate, Error as CoreError, MonthCursor};

use crate::arg::MonthArgs;
use crate::config::Config;
use crate::grid_formatter::GridFormatter;
use crate::util::{EventSpec, OutputFormat};

#[derive(Debug, Default, Clone)]
pub struct CmdMonth {
    pub month: Option<MonthCursor>,
    pub today: Option<CalendarDate>,
    pub select: Option<CalendarDate>,
    pub events: Vec<EventSpec>,
    pub shift: i64,
    pub first_day_of_week: Option<Weekday>,
    pub timezone: Option<Tz>,
    pub output_format: OutputFormat,
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("m")
            .about("Show the month grid with event indicators")
            .arg(MonthArgs::month())
            .arg(MonthArgs::today())
            .arg(MonthArgs::select())
            .arg(MonthArgs::event())
            .arg(MonthArgs::next())
            .arg(MonthArgs::prev())
            .arg(MonthArgs::first_day())
            .arg(MonthArgs::timezone())
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            month: MonthArgs::get_month(matches),
            today: MonthArgs::get_today(matches),
            select: MonthArgs::get_select(matches),
            events: MonthArgs::get_events(matches),
            shift: MonthArgs::get_shift(matches),
            first_day_of_week: MonthArgs::get_first_day(matches),
            timezone: MonthArgs::get_timezone(matches),
            output_format: OutputFormat::from(matches),
        }
    }

    /// Show the requested month.
    pub fn run(self, calendar: CalendarConfig, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "rendering month...");
        print!("{}", self.render(calendar, config)?);
        Ok(())
    }

    /// Build the calendar state described by the arguments and render it.
    pub fn render(
        &self,
        calendar: CalendarConfig,
        config: &Config,
    ) -> Result<String, CoreError> {
        let controller = self.controller(calendar)?;
        Ok(GridFormatter::new(config.max_indicators)
            .with_output_format(self.output_format)
            .format(&controller)
            .to_string())
    }

    fn controller(&self, mut calendar: CalendarConfig) -> Result<CalendarController, CoreError> {
        if let Some(first_day_of_week) = self.first_day_of_week {
            calendar.first_day_of_week = first_day_of_week;
        }
        if let Some(timezone) = self.timezone {
            calendar.timezone = timezone;
        }

        let today = self.today.unwrap_or_else(|| calendar.today());
        let start = self.month.unwrap_or_else(|| MonthCursor::new(today));
        let out_of_range = || CoreError::MonthOutOfRange {
            month: start.to_string(),
            shift: self.shift,
        };
        let months = i32::try_from(self.shift).map_err(|_| out_of_range())?;
        start.checked_shift(months).ok_or_else(out_of_range)?;

        let mut controller = CalendarController::new(calendar, today);
        if let Some(month) = self.month {
            controller.show_month(month.anchor());
        }

        for spec in &self.events {
            if controller.add_event(&spec.title, spec.date, spec.color).is_none() {
                tracing::warn!(date = %spec.date, "ignoring event with blank title");
                eprintln!(
                    "{} ignoring event on {} with a blank title",
                    "Warning:".yellow(),
                    spec.date
                );
            }
        }

        if let Some(date) = self.select {
            controller.select_date(date);
        }

        for _ in 0..self.shift.unsigned_abs() {
            if self.shift > 0 {
                controller.next_month();
            } else {
                controller.previous_month();
            }
        }
        Ok(controller)
    }
}
