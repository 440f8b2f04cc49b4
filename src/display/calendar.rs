//! Calendar display formatting
//!
//! Monday-first month grid with event markers, plus event lists.

use chrono::{Datelike, NaiveDate};

use crate::i18n::Translator;
use crate::models::{CalendarEvent, Recurrence};
use crate::services::calendar::MonthView;

use super::table;

const WEEKDAY_KEYS: [&str; 7] = [
    "weekday_mon",
    "weekday_tue",
    "weekday_wed",
    "weekday_thu",
    "weekday_fri",
    "weekday_sat",
    "weekday_sun",
];

fn recurrence_label(recurrence: Recurrence, t: &Translator) -> &'static str {
    match recurrence {
        Recurrence::None => t.t("once"),
        Recurrence::Weekly => t.t("weekly"),
        Recurrence::Monthly => t.t("monthly"),
    }
}

/// Render the month as a 7-column grid
///
/// Days with events are marked with `*`; `today`, when inside the month, is
/// bracketed.
pub fn format_month_grid(view: &MonthView, today: Option<NaiveDate>, t: &Translator) -> String {
    let mut output = format!("{}\n", view.cursor);

    for key in WEEKDAY_KEYS {
        output.push_str(&format!(" {:>3} ", t.t(key)));
    }
    output.push('\n');

    let blanks = view.cursor.leading_blanks() as usize;
    let mut column = 0;
    for _ in 0..blanks {
        output.push_str("     ");
        column += 1;
    }

    let today = today.filter(|d| view.cursor.contains(*d));
    for day in 1..=view.cursor.days() {
        let marker = if view.has_events(day) { '*' } else { ' ' };
        let is_today = today.map(|d| d.day()) == Some(day);
        let cell = if is_today {
            format!("[{:>2}]{}", day, marker)
        } else {
            format!(" {:>2} {}", day, marker)
        };
        output.push_str(&cell);

        column += 1;
        if column == 7 {
            output.push('\n');
            column = 0;
        }
    }
    if column != 0 {
        output.push('\n');
    }

    output
}

/// Format dated occurrences as a table
pub fn format_event_list(occurrences: &[(NaiveDate, CalendarEvent)], t: &Translator) -> String {
    if occurrences.is_empty() {
        return format!("{}\n", t.t("no_events"));
    }

    let header = [t.t("date"), t.t("event_name"), t.t("recurring_event"), t.t("description"), t.t("id")];
    let rows = occurrences.iter().map(|(date, event)| {
        vec![
            date.format("%Y-%m-%d").to_string(),
            event.name.clone(),
            recurrence_label(event.recurrence, t).to_string(),
            event.description.clone(),
            event.id.to_string(),
        ]
    });

    let mut output = table(&header, rows);
    output.push('\n');
    output
}

/// Format a single event definition
pub fn format_event_details(event: &CalendarEvent, t: &Translator) -> String {
    let mut output = String::new();
    output.push_str(&format!("{:16} {}\n", t.t("id"), event.id));
    output.push_str(&format!("{:16} {}\n", t.t("event_name"), event.name));
    output.push_str(&format!("{:16} {}\n", t.t("date"), event.start_date.format("%Y-%m-%d")));
    output.push_str(&format!("{:16} {}\n", t.t("recurring_event"), recurrence_label(event.recurrence, t)));
    if !event.description.is_empty() {
        output.push_str(&format!("{:16} {}\n", t.t("description"), event.description));
    }
    output
}
