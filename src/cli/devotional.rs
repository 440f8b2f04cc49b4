//! Devotional study CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_score, format_study};
use crate::error::GraceResult;
use crate::i18n::Translator;
use crate::services::DevotionalService;
use crate::storage::Storage;

/// Devotional subcommands
#[derive(Subcommand)]
pub enum DevotionalCommands {
    /// Show the study with your answers filled in
    Show {
        /// Show the correct answers instead
        #[arg(short, long)]
        review: bool,
    },
    /// List the blanks and your current answers
    Blanks,
    /// Fill in a blank (an empty answer clears it)
    Answer {
        /// Blank ID, as listed by `blanks`
        blank: String,
        /// Your answer
        answer: String,
    },
    /// Show how many blanks are answered correctly
    Score,
    /// Clear every answer
    Reset,
}

/// Handle a devotional command
pub fn handle_devotional_command(storage: &Storage, settings: &Settings, cmd: DevotionalCommands) -> GraceResult<()> {
    let service = DevotionalService::new(storage);
    let t = Translator::new(settings.language);

    match cmd {
        DevotionalCommands::Show { review } => {
            let sections = service.render(review)?;
            print!("{}", format_study(&service.study().title_key, &sections, review, &t));
        }

        DevotionalCommands::Blanks => {
            let answers = service.answers()?;
            for (id, _) in service.study().blanks() {
                let given = answers.get(id).map(String::as_str).unwrap_or("____");
                println!("{:14} {}", id, given);
            }
        }

        DevotionalCommands::Answer { blank, answer } => {
            service.answer(&blank, &answer)?;
            print!("{}", format_score(service.score()?, &t));
        }

        DevotionalCommands::Score => {
            print!("{}", format_score(service.score()?, &t));
        }

        DevotionalCommands::Reset => {
            service.reset()?;
            print!("{}", format_score(service.score()?, &t));
        }
    }

    Ok(())
}
