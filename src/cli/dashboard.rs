//! Dashboard CLI command

use crate::config::Settings;
use crate::display::format_dashboard;
use crate::error::GraceResult;
use crate::i18n::Translator;
use crate::services::dashboard;
use crate::services::GeminiVerseClient;
use crate::storage::Storage;

use super::today;

/// Print the dashboard, fetching today's verse from Gemini
pub fn handle_dashboard_command(storage: &Storage, settings: &Settings) -> GraceResult<()> {
    let verses = GeminiVerseClient::from_env(settings.verse_model.clone())?;
    let view = dashboard::build(storage, settings, &verses, today())?;

    let t = Translator::new(settings.language);
    print!("{}", format_dashboard(&view, &t, settings.currency));
    Ok(())
}
