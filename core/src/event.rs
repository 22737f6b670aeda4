// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CalendarDate, Error};

/// A calendar event. Immutable once created; only the store creates events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub(crate) id: Uuid,
    pub(crate) title: String,
    pub(crate) date: CalendarDate,
    pub(crate) color: ColorTag,
}

impl Event {
    /// The unique identifier for the event.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The display title, never blank.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The day the event falls on.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// The display color of the event.
    pub fn color(&self) -> ColorTag {
        self.color
    }
}

/// The display color of an event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    #[default]
    Blue,
    Red,
    Green,
    Orange,
    Purple,
    Pink,
    Yellow,
    Cyan,
}

const COLOR_BLUE: &str = "blue";
const COLOR_RED: &str = "red";
const COLOR_GREEN: &str = "green";
const COLOR_ORANGE: &str = "orange";
const COLOR_PURPLE: &str = "purple";
const COLOR_PINK: &str = "pink";
const COLOR_YELLOW: &str = "yellow";
const COLOR_CYAN: &str = "cyan";

impl ColorTag {
    /// All colors, in picker order.
    pub const ALL: [ColorTag; 8] = [
        ColorTag::Blue,
        ColorTag::Red,
        ColorTag::Green,
        ColorTag::Orange,
        ColorTag::Purple,
        ColorTag::Pink,
        ColorTag::Yellow,
        ColorTag::Cyan,
    ];

    /// Names of all colors, in picker order.
    pub const NAMES: [&str; 8] = [
        COLOR_BLUE,
        COLOR_RED,
        COLOR_GREEN,
        COLOR_ORANGE,
        COLOR_PURPLE,
        COLOR_PINK,
        COLOR_YELLOW,
        COLOR_CYAN,
    ];
}

impl AsRef<str> for ColorTag {
    fn as_ref(&self) -> &str {
        match self {
            ColorTag::Blue => COLOR_BLUE,
            ColorTag::Red => COLOR_RED,
            ColorTag::Green => COLOR_GREEN,
            ColorTag::Orange => COLOR_ORANGE,
            ColorTag::Purple => COLOR_PURPLE,
            ColorTag::Pink => COLOR_PINK,
            ColorTag::Yellow => COLOR_YELLOW,
            ColorTag::Cyan => COLOR_CYAN,
        }
    }
}

impl Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for ColorTag {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            COLOR_BLUE => Ok(ColorTag::Blue),
            COLOR_RED => Ok(ColorTag::Red),
            COLOR_GREEN => Ok(ColorTag::Green),
            COLOR_ORANGE => Ok(ColorTag::Orange),
            COLOR_PURPLE => Ok(ColorTag::Purple),
            COLOR_PINK => Ok(ColorTag::Pink),
            COLOR_YELLOW => Ok(ColorTag::Yellow),
            COLOR_CYAN => Ok(ColorTag::Cyan),
            _ => Err(Error::InvalidColor(value.to_string())),
        }
    }
}
