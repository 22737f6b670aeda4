// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use uuid::Uuid;

use crate::{
    CalendarConfig, CalendarDate, ColorTag, Event, EventStore, MonthCursor, MonthGrid,
    generate_grid,
};

type Subscriber = Box<dyn FnMut(&MonthGrid<'_>)>;

/// Owns the events, the displayed month and the selection of a calendar view.
///
/// Every mutation regenerates the grid and hands the fresh snapshot to each
/// subscriber. Mutations that change nothing, such as adding a blank title or
/// removing an unknown event, do not notify.
pub struct CalendarController {
    config: CalendarConfig,
    store: EventStore,
    cursor: MonthCursor,
    selected: Option<CalendarDate>,
    today: CalendarDate,
    subscribers: Vec<Subscriber>,
}

impl CalendarController {
    /// Create a controller showing the month of `today`.
    pub fn new(config: CalendarConfig, today: CalendarDate) -> Self {
        Self {
            config,
            store: EventStore::new(),
            cursor: MonthCursor::new(today),
            selected: None,
            today,
            subscribers: Vec::new(),
        }
    }

    /// Register a callback invoked with the new grid after every mutation.
    pub fn subscribe(&mut self, callback: impl FnMut(&MonthGrid<'_>) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// The current grid snapshot.
    pub fn grid(&self) -> MonthGrid<'_> {
        generate_grid(
            self.cursor,
            self.today,
            self.selected,
            &self.store,
            &self.config,
        )
    }

    pub fn add_event(&mut self, title: &str, date: CalendarDate, color: ColorTag) -> Option<Event> {
        let event = self.store.add(title, date, color)?;
        self.notify();
        Some(event)
    }

    pub fn remove_event(&mut self, id: Uuid) -> Option<Event> {
        let event = self.store.remove(id)?;
        self.notify();
        Some(event)
    }

    pub fn select_date(&mut self, date: CalendarDate) {
        tracing::debug!(%date, "selecting date");
        self.selected = Some(date);
        self.notify();
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.notify();
    }

    pub fn next_month(&mut self) {
        self.cursor.next_month();
        tracing::debug!(month = %self.cursor, "moved to next month");
        self.notify();
    }

    pub fn previous_month(&mut self) {
        self.cursor.previous_month();
        tracing::debug!(month = %self.cursor, "moved to previous month");
        self.notify();
    }

    /// Jump to the month containing `date`.
    pub fn show_month(&mut self, date: CalendarDate) {
        self.cursor = MonthCursor::new(date);
        self.notify();
    }

    /// All events on the given day, in insertion order.
    pub fn events_on(&self, date: CalendarDate) -> Vec<&Event> {
        self.store.events_on(date)
    }

    /// Events on the selected day, empty when nothing is selected.
    pub fn selected_date_events(&self) -> Vec<&Event> {
        match self.selected {
            Some(date) => self.store.events_on(date),
            None => Vec::new(),
        }
    }

    pub fn month_title(&self) -> String {
        self.cursor.title()
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    fn notify(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }

        let grid = generate_grid(
            self.cursor,
            self.today,
            self.selected,
            &self.store,
            &self.config,
        );
        for subscriber in &mut self.subscribers {
            subscriber(&grid);
        }
    }
}

impl fmt::Debug for CalendarController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarController")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("cursor", &self.cursor)
            .field("selected", &self.selected)
            .field("today", &self.today)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
