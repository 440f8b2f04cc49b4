//! Calendar event model
//!
//! An event is stored once with its start date and recurrence rule; the
//! individual occurrences are derived, never stored.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::EventId;
use crate::error::GraceError;

/// How often an event repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    /// Occurs once, on the start date
    #[default]
    None,
    /// Occurs on the start date's weekday every week
    Weekly,
    /// Occurs on the start date's day-of-month every month that has that day
    Monthly,
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for Recurrence {
    type Err = GraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "once" => Ok(Self::None),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(GraceError::Validation(format!(
                "Unknown recurrence '{}': expected none, weekly or monthly",
                other
            ))),
        }
    }
}

/// A calendar event definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,

    pub name: String,

    /// First day the event occurs
    #[serde(rename = "date")]
    pub start_date: NaiveDate,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "recurring", default)]
    pub recurrence: Recurrence,
}

impl CalendarEvent {
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        description: impl Into<String>,
        recurrence: Recurrence,
    ) -> Self {
        Self {
            id: EventId::new(),
            name: name.into(),
            start_date,
            description: description.into(),
            recurrence,
        }
    }

    /// Whether the event has an occurrence on `day`
    ///
    /// A monthly event starting on the 31st has no occurrence in months with
    /// fewer days; there is no last-day-of-month fallback.
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        if self.start_date > day {
            return false;
        }

        match self.recurrence {
            Recurrence::None => self.start_date == day,
            Recurrence::Weekly => self.start_date.weekday() == day.weekday(),
            Recurrence::Monthly => self.start_date.day() == day.day(),
        }
    }

    pub fn validate(&self) -> Result<(), GraceError> {
        if self.name.trim().is_empty() {
            return Err(GraceError::Validation("Event name cannot be empty".into()));
        }
        Ok(())
    }
}
