//! Calendar CLI commands
//!
//! Implements CLI commands for managing family events and viewing the
//! month grid.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_event_details, format_event_list, format_month_grid};
use crate::error::GraceResult;
use crate::i18n::Translator;
use crate::models::Recurrence;
use crate::services::{CalendarService, EventUpdate, MonthCursor};
use crate::storage::Storage;

use super::{parse_date, parse_date_or_today, today};

/// Calendar subcommands
#[derive(Subcommand)]
pub enum CalendarCommands {
    /// Add an event
    Add {
        /// Event name
        name: String,
        /// First date of the event (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// Recurrence (none, weekly, monthly)
        #[arg(short, long, default_value = "none")]
        recurring: String,
    },
    /// Edit an event
    Edit {
        /// Event ID
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short = 'D', long)]
        description: Option<String>,
        #[arg(short, long)]
        recurring: Option<String>,
    },
    /// Delete an event
    Delete {
        /// Event ID
        id: String,
    },
    /// Show a month grid and its events
    Month {
        /// Month to show (YYYY-MM, defaults to the current month)
        month: Option<String>,
    },
    /// List events on one day
    Day {
        /// Date (YYYY-MM-DD, defaults to today)
        date: Option<String>,
    },
    /// List events in the coming days
    Upcoming {
        /// Number of days to look ahead (1-366)
        #[arg(short, long, default_value = "7", value_parser = clap::value_parser!(u32).range(1..=366))]
        days: u32,
    },
}

/// Handle a calendar command
pub fn handle_calendar_command(storage: &Storage, settings: &Settings, cmd: CalendarCommands) -> GraceResult<()> {
    let service = CalendarService::new(storage);
    let t = Translator::new(settings.language);

    match cmd {
        CalendarCommands::Add {
            name,
            date,
            description,
            recurring,
        } => {
            let start = parse_date_or_today(date.as_deref())?;
            let recurrence: Recurrence = recurring.parse()?;
            let event = service.add(&name, start, description.as_deref().unwrap_or_default(), recurrence)?;

            println!("{}", t.t("add_event"));
            print!("{}", format_event_details(&event, &t));
        }

        CalendarCommands::Edit {
            id,
            name,
            date,
            description,
            recurring,
        } => {
            let update = EventUpdate {
                name,
                start_date: date.as_deref().map(parse_date).transpose()?,
                description,
                recurrence: recurring.as_deref().map(str::parse).transpose()?,
            };
            let event = service.update(&id, update)?;
            print!("{}", format_event_details(&event, &t));
        }

        CalendarCommands::Delete { id } => {
            let event = service.delete(&id)?;
            println!("Deleted event: {} ({})", event.name, event.id);
        }

        CalendarCommands::Month { month } => {
            let cursor = match month {
                Some(month) => month.parse::<MonthCursor>()?,
                None => MonthCursor::containing(today()),
            };
            let view = service.month(cursor)?;

            print!("{}", format_month_grid(&view, Some(today()), &t));
            println!();

            print!("{}", format_event_list(&view.occurrences(), &t));
        }

        CalendarCommands::Day { date } => {
            let date = parse_date_or_today(date.as_deref())?;
            let occurrences: Vec<_> = service.day(date)?.into_iter().map(|e| (date, e)).collect();

            println!("{} {}", t.t("events_on"), date.format("%Y-%m-%d"));
            print!("{}", format_event_list(&occurrences, &t));
        }

        CalendarCommands::Upcoming { days } => {
            let occurrences = service.upcoming(today(), days)?;
            println!("{}", t.t("upcoming_events"));
            print!("{}", format_event_list(&occurrences, &t));
        }
    }

    Ok(())
}
