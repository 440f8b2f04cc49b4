//! Dashboard composition
//!
//! Gathers the greeting, today's verse, the budget summary and the coming
//! week's events into one view.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::GraceResult;
use crate::i18n::Translator;
use crate::models::CalendarEvent;
use crate::services::budget::{monthly_summary, MonthlySummary};
use crate::services::calendar::upcoming;
use crate::services::verse::{fetch_or_fallback, Verse, VerseSource};
use crate::storage::Storage;

/// Days of upcoming events shown on the dashboard
pub const UPCOMING_DAYS: u32 = 7;

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub greeting: String,
    pub verse: Verse,
    pub budget: Option<MonthlySummary>,
    pub upcoming: Vec<(NaiveDate, CalendarEvent)>,
}

/// Build the dashboard for `today`
pub fn build(
    storage: &Storage,
    settings: &Settings,
    verses: &dyn VerseSource,
    today: NaiveDate,
) -> GraceResult<Dashboard> {
    let t = Translator::new(settings.language);

    let transactions = storage.transactions().load()?;
    let goals = storage.budget_goals()?;
    let events = storage.events().load()?;

    Ok(Dashboard {
        greeting: format!("{} {}!", t.t("welcome_user"), settings.user_name),
        verse: fetch_or_fallback(verses, t.t("todays_verse_prompt")),
        budget: monthly_summary(&transactions, &goals, today),
        upcoming: upcoming(&events, today, UPCOMING_DAYS)
            .into_iter()
            .map(|(date, e)| (date, e.clone()))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraceError;
    use crate::i18n::Language;
    use crate::models::{BudgetGoal, FinanceCategory, Money, Recurrence, Transaction};

    struct Offline;

    impl VerseSource for Offline {
        fn generate(&self, _prompt: &str) -> GraceResult<String> {
            Err(GraceError::Verse("offline".into()))
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_dashboard_composes_sections() {
        let storage = Storage::in_memory();
        let today = date(2024, 1, 3);

        storage
            .set_budget_goals(&[BudgetGoal::new(FinanceCategory::Rent, Money::from_units(1200))])
            .unwrap();
        storage
            .transactions()
            .insert(Transaction::new(Money::from_units(1200), today, FinanceCategory::Rent, ""))
            .unwrap();
        storage
            .events()
            .insert(CalendarEvent::new("Sunday Service", date(2023, 12, 31), "", Recurrence::Weekly))
            .unwrap();
        storage
            .events()
            .insert(CalendarEvent::new("Far Away", date(2024, 2, 1), "", Recurrence::None))
            .unwrap();

        let settings = Settings {
            language: Language::En,
            user_name: "Andersson".into(),
            ..Settings::default()
        };
        let dashboard = build(&storage, &settings, &Offline, today).unwrap();

        assert_eq!(dashboard.greeting, "Welcome back, Andersson!");
        assert_eq!(dashboard.verse, Verse::fallback());
        assert_eq!(dashboard.budget.unwrap().total_spent, Money::from_units(1200));
        assert_eq!(dashboard.upcoming.len(), 1);
        assert_eq!(dashboard.upcoming[0].0, date(2024, 1, 7));
    }

    #[test]
    fn test_dashboard_without_budget() {
        let storage = Storage::in_memory();
        let dashboard = build(&storage, &Settings::default(), &Offline, date(2024, 1, 3)).unwrap();
        assert!(dashboard.budget.is_none());
        assert!(dashboard.upcoming.is_empty());
    }
}
