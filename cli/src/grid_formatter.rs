// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::{Color, ColoredString, Colorize};
use monthcal_core::{
    CalendarController, ColorTag, DAYS_PER_WEEK, DayCell, Event, weekday_symbols,
};
use unicode_width::UnicodeWidthStr;

use crate::util::OutputFormat;

const INDICATOR: &str = "•";
const MIN_CELL_WIDTH: usize = 3;
const SEPARATOR: &str = " ";

/// Renders the month grid of a controller, followed by the events of the
/// selected day.
#[derive(Debug, Clone, Copy)]
pub struct GridFormatter {
    max_indicators: usize,
    format: OutputFormat,
}

impl GridFormatter {
    pub fn new(max_indicators: usize) -> Self {
        Self {
            max_indicators,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, controller: &'a CalendarController) -> Display<'a> {
        Display {
            controller,
            formatter: self,
        }
    }

    fn cell_width(&self) -> usize {
        self.max_indicators.max(MIN_CELL_WIDTH)
    }

    fn write_table(
        &self,
        f: &mut fmt::Formatter<'_>,
        controller: &CalendarController,
    ) -> fmt::Result {
        let width = self.cell_width();
        let total = width * DAYS_PER_WEEK + SEPARATOR.len() * (DAYS_PER_WEEK - 1);
        let title = format!("{:^total$}", controller.month_title());
        writeln!(f, "{}", title.trim_end().bold())?;

        let header: Vec<_> = weekday_symbols(controller.config())
            .iter()
            .map(|symbol| format!("{symbol:>width$}"))
            .collect();
        writeln!(f, "{}", header.join(SEPARATOR).bold())?;

        let grid = controller.grid();
        for week in grid.weeks() {
            let days: Vec<_> = week.iter().map(|cell| self.day(cell).to_string()).collect();
            writeln!(f, "{}", days.join(SEPARATOR))?;

            if week.iter().any(DayCell::has_events) {
                let dots: Vec<_> = week.iter().map(|cell| self.indicators(cell)).collect();
                writeln!(f, "{}", dots.join(SEPARATOR).trim_end())?;
            }
        }

        if let Some(selected) = controller.selected() {
            writeln!(f)?;
            let heading = selected.naive().format("%A, %B %-d, %Y").to_string();
            writeln!(f, "{}", heading.bold())?;

            let events = controller.selected_date_events();
            if events.is_empty() {
                writeln!(f, "{}", "No events for this day".dimmed())?;
            }
            for event in events {
                writeln!(f, "{}", format_event(event))?;
            }
        }
        Ok(())
    }

    fn day(&self, cell: &DayCell<'_>) -> ColoredString {
        let day = format!("{:>width$}", cell.date.day(), width = self.cell_width());
        let mut day = if cell.is_today {
            day.color(Color::Red).bold()
        } else if cell.is_in_displayed_month {
            day.normal()
        } else {
            day.dimmed()
        };
        if cell.is_selected {
            day = day.reversed();
        }
        day
    }

    /// One dot per event up to the limit, right aligned under the day.
    fn indicators(&self, cell: &DayCell<'_>) -> String {
        let dots: Vec<_> = cell
            .events
            .iter()
            .take(self.max_indicators)
            .map(|event| INDICATOR.color(tag_color(event.color())).to_string())
            .collect();
        let used = INDICATOR.width() * dots.len();
        let padding = " ".repeat(self.cell_width().saturating_sub(used));
        format!("{padding}{}", dots.concat())
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    controller: &'a CalendarController,
    formatter: &'a GridFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&self.controller.grid())
                    .map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table => self.formatter.write_table(f, self.controller),
        }
    }
}

fn format_event(event: &Event) -> String {
    format!(
        "{} {}",
        INDICATOR.color(tag_color(event.color())),
        event.title()
    )
}

fn tag_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Blue => Color::Blue,
        ColorTag::Red => Color::Red,
        ColorTag::Green => Color::Green,
        ColorTag::Orange => Color::TrueColor {
            r: 255,
            g: 149,
            b: 0,
        },
        ColorTag::Purple => Color::Magenta,
        ColorTag::Pink => Color::BrightMagenta,
        ColorTag::Yellow => Color::Yellow,
        ColorTag::Cyan => Color::Cyan,
    }
}
