// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

use crate::{CalendarConfig, CalendarDate, Event, EventStore, MonthCursor};

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;

/// Number of cells in every month grid, six full weeks.
pub const GRID_DAYS: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// One square of the month grid.
///
/// Cells are derived on every regeneration and borrow their events from the
/// store they were generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell<'a> {
    pub date: CalendarDate,
    pub is_in_displayed_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub events: Vec<&'a Event>,
}

impl DayCell<'_> {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// The 42 cells displayed for a month, ascending by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid<'a> {
    month: MonthCursor,
    cells: Vec<DayCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// The displayed month.
    pub fn month(&self) -> MonthCursor {
        self.month
    }

    pub fn cells(&self) -> &[DayCell<'a>] {
        &self.cells
    }

    /// The six rows of the grid, seven cells each.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell<'a>]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// The cell for `date`, if it is part of the grid.
    pub fn cell(&self, date: CalendarDate) -> Option<&DayCell<'a>> {
        let offset = (date.naive() - self.first_date().naive()).num_days();
        usize::try_from(offset)
            .ok()
            .and_then(|index| self.cells.get(index))
    }

    pub fn first_date(&self) -> CalendarDate {
        self.cells[0].date
    }

    pub fn last_date(&self) -> CalendarDate {
        self.cells[GRID_DAYS - 1].date
    }

    pub fn into_cells(self) -> Vec<DayCell<'a>> {
        self.cells
    }
}

/// Compute the display grid for a month.
///
/// The grid starts on the configured first day of the week on or before the
/// first of the month and runs for exactly [`GRID_DAYS`] consecutive days.
/// Days are stepped on calendar dates, so DST transitions in the configured
/// timezone never skip or repeat a day.
pub fn generate_grid<'a>(
    month: impl Into<MonthCursor>,
    today: CalendarDate,
    selected: Option<CalendarDate>,
    store: &'a EventStore,
    config: &CalendarConfig,
) -> MonthGrid<'a> {
    let month = month.into();
    let start = month.first_day().start_of_week(config.first_day_of_week);

    let mut cells = Vec::with_capacity(GRID_DAYS);
    let mut date = start;
    for _ in 0..GRID_DAYS {
        cells.push(DayCell {
            date,
            is_in_displayed_month: month.contains(date),
            is_today: date == today,
            is_selected: selected == Some(date),
            events: store.events_on(date),
        });
        date = date.succ();
    }

    tracing::trace!(%month, %start, "generated month grid");
    MonthGrid { month, cells }
}

/// Short weekday labels for the grid header, starting at the configured
/// first day of the week.
pub fn weekday_symbols(config: &CalendarConfig) -> [String; DAYS_PER_WEEK] {
    let mut weekday = config.first_day_of_week;
    std::array::from_fn(|_| {
        let symbol = weekday.to_string();
        weekday = weekday.succ();
        symbol
    })
}
