// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Month grid calendar core: day-granular dates, an in-memory event store and
//! the fixed six-week grid shown for a month.

mod config;
mod controller;
mod cursor;
mod date;
mod error;
mod event;
mod grid;
mod store;

pub use crate::config::{APP_NAME, CalendarConfig, parse_timezone, parse_weekday, system_timezone};
pub use crate::controller::CalendarController;
pub use crate::cursor::MonthCursor;
pub use crate::date::CalendarDate;
pub use crate::error::Error;
pub use crate::event::{ColorTag, Event};
pub use crate::grid::{
    DAYS_PER_WEEK, DayCell, GRID_DAYS, MonthGrid, WEEKS_PER_GRID, generate_grid, weekday_symbols,
};
pub use crate::store::EventStore;
