//! Calendar service
//!
//! Expands recurring event definitions into per-day occurrences and manages
//! the stored event list.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use tracing::info;

use crate::error::{GraceError, GraceResult};
use crate::models::{CalendarEvent, Recurrence};
use crate::storage::Storage;

/// Events occurring on each day of a month, keyed by day-of-month
///
/// Days without events are absent. Within a day, events keep the order of
/// the input slice.
pub type MonthOccurrences<'a> = BTreeMap<u32, Vec<&'a CalendarEvent>>;

/// Number of days in `month` (1-12) of `year`, or `None` for an invalid month
///
/// Computed as the day before the first of the following month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|last| last.day())
}

/// Compute which events occur on which day of `month` (1-12) in `year`
///
/// An invalid month yields an empty map.
pub fn occurrences_in_month(events: &[CalendarEvent], year: i32, month: u32) -> MonthOccurrences<'_> {
    let mut by_day = MonthOccurrences::new();
    let Some(last_day) = days_in_month(year, month) else {
        return by_day;
    };

    for day in 1..=last_day {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let todays: Vec<&CalendarEvent> = events.iter().filter(|e| e.occurs_on(date)).collect();
        if !todays.is_empty() {
            by_day.insert(day, todays);
        }
    }

    by_day
}

/// Events occurring on a single date, in input order
pub fn events_on(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    events.iter().filter(|e| e.occurs_on(date)).collect()
}

/// Longest look-ahead window `upcoming` will walk
pub const MAX_UPCOMING_DAYS: u32 = 366;

/// Occurrences in the `days`-day window starting at `from`, ordered by date.
/// The window is capped at [`MAX_UPCOMING_DAYS`].
pub fn upcoming(events: &[CalendarEvent], from: NaiveDate, days: u32) -> Vec<(NaiveDate, &CalendarEvent)> {
    from.iter_days()
        .take(days.min(MAX_UPCOMING_DAYS) as usize)
        .flat_map(|date| events_on(events, date).into_iter().map(move |e| (date, e)))
        .collect()
}

/// A year/month position for calendar navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> GraceResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(GraceError::Validation(format!(
                "Month must be between 1 and 12 (got {})",
                month
            )));
        }
        Ok(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(&self) -> Self {
        self.offset(1)
    }

    pub fn prev(&self) -> Self {
        self.offset(-1)
    }

    /// Move by `months`, wrapping across years
    pub fn offset(&self, months: i32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) + months;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month).unwrap_or(0)
    }

    /// Blank cells before day 1 in a Monday-first grid
    pub fn leading_blanks(&self) -> u32 {
        (self.first_day().weekday().num_days_from_sunday() + 6) % 7
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthCursor {
    type Err = GraceError;

    /// Parses `YYYY-MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GraceError::Validation(format!("Invalid month '{}': expected YYYY-MM", s));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

/// A materialized month: the cursor plus owned per-day occurrences
#[derive(Debug, Clone)]
pub struct MonthView {
    pub cursor: MonthCursor,
    pub days: BTreeMap<u32, Vec<CalendarEvent>>,
}

impl MonthView {
    pub fn events_on_day(&self, day: u32) -> &[CalendarEvent] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_events(&self, day: u32) -> bool {
        self.days.contains_key(&day)
    }

    /// Every occurrence as `(date, event)`, ordered by day
    pub fn occurrences(&self) -> Vec<(NaiveDate, CalendarEvent)> {
        self.days
            .iter()
            .filter_map(|(day, events)| {
                let date = NaiveDate::from_ymd_opt(self.cursor.year(), self.cursor.month(), *day)?;
                Some(events.iter().map(move |e| (date, e.clone())))
            })
            .flatten()
            .collect()
    }
}

/// Changes to apply to an existing event; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct EventUpdate {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub recurrence: Option<Recurrence>,
}

/// Service for calendar management
pub struct CalendarService<'a> {
    storage: &'a Storage,
}

impl<'a> CalendarService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> GraceResult<Vec<CalendarEvent>> {
        self.storage.events().load()
    }

    pub fn find(&self, query: &str) -> GraceResult<CalendarEvent> {
        self.storage.events().resolve(query)
    }

    pub fn add(
        &self,
        name: &str,
        start_date: NaiveDate,
        description: &str,
        recurrence: Recurrence,
    ) -> GraceResult<CalendarEvent> {
        let event = CalendarEvent::new(name.trim(), start_date, description.trim(), recurrence);
        event.validate()?;

        let event = self.storage.events().insert(event)?;
        info!(id = %event.id, name = %event.name, %recurrence, "event added");
        Ok(event)
    }

    /// Replace fields of the event matching `query`
    pub fn update(&self, query: &str, update: EventUpdate) -> GraceResult<CalendarEvent> {
        let mut event = self.find(query)?;

        if let Some(name) = update.name {
            event.name = name.trim().to_string();
        }
        if let Some(start_date) = update.start_date {
            event.start_date = start_date;
        }
        if let Some(description) = update.description {
            event.description = description.trim().to_string();
        }
        if let Some(recurrence) = update.recurrence {
            event.recurrence = recurrence;
        }
        event.validate()?;

        self.storage.events().replace(event.clone())?;
        info!(id = %event.id, "event updated");
        Ok(event)
    }

    pub fn delete(&self, query: &str) -> GraceResult<CalendarEvent> {
        let event = self.find(query)?;
        let removed = self.storage.events().remove(event.id)?;
        info!(id = %removed.id, "event deleted");
        Ok(removed)
    }

    pub fn month(&self, cursor: MonthCursor) -> GraceResult<MonthView> {
        let events = self.list()?;
        let days = occurrences_in_month(&events, cursor.year(), cursor.month())
            .into_iter()
            .map(|(day, todays)| (day, todays.into_iter().cloned().collect()))
            .collect();
        Ok(MonthView { cursor, days })
    }

    pub fn day(&self, date: NaiveDate) -> GraceResult<Vec<CalendarEvent>> {
        let events = self.list()?;
        Ok(events_on(&events, date).into_iter().cloned().collect())
    }

    pub fn upcoming(&self, from: NaiveDate, days: u32) -> GraceResult<Vec<(NaiveDate, CalendarEvent)>> {
        let events = self.list()?;
        Ok(upcoming(&events, from, days)
            .into_iter()
            .map(|(date, e)| (date, e.clone()))
            .collect())
    }
}
