// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use uuid::Uuid;

use crate::{CalendarDate, ColorTag, Event};

/// The authoritative, in-memory list of events.
///
/// Events are kept in insertion order and every query is a linear filter.
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event and return a copy of it.
    ///
    /// The title is trimmed; a blank title rejects the add and leaves the
    /// store untouched, returning `None`.
    pub fn add(&mut self, title: &str, date: CalendarDate, color: ColorTag) -> Option<Event> {
        let title = title.trim();
        if title.is_empty() {
            tracing::debug!(%date, "rejecting event with blank title");
            return None;
        }

        let event = Event {
            id: Uuid::new_v4(),
            title: title.to_string(),
            date,
            color,
        };
        tracing::debug!(id = %event.id, %date, "adding event");
        self.events.push(event.clone());
        Some(event)
    }

    /// Remove the event with the given id, returning it if it was present.
    pub fn remove(&mut self, id: Uuid) -> Option<Event> {
        let index = self.events.iter().position(|e| e.id == id)?;
        tracing::debug!(%id, "removing event");
        Some(self.events.remove(index))
    }

    /// All events on the given day, in insertion order.
    pub fn events_on(&self, date: CalendarDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    /// Look up an event by id.
    pub fn get(&self, id: Uuid) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over all events in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }
}
