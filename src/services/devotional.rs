//! Devotional study service
//!
//! Holds the built-in fill-in-the-blank study and the user's saved answers.

use tracing::info;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{GraceError, GraceResult};
use crate::models::{DevotionalStudy, StudyAnswers, StudyPart, StudyScore, StudySection};
use crate::storage::Storage;

fn text(value: &str) -> StudyPart {
    StudyPart::Text {
        value: value.to_string(),
    }
}

fn blank(id: &str, answer: &str) -> StudyPart {
    StudyPart::Blank {
        id: id.to_string(),
        answer: answer.to_string(),
    }
}

fn section(title: &str, content: Vec<StudyPart>) -> StudySection {
    StudySection {
        title: title.to_string(),
        content,
    }
}

/// The study shipped with the application
pub fn builtin_study() -> DevotionalStudy {
    DevotionalStudy {
        title_key: "financial_study".to_string(),
        sections: vec![
            section(
                "1. Everything Belongs to God",
                vec![
                    text("\"The earth is the "),
                    blank("ownership_1", "Lord's"),
                    text(", and everything in it, the world, and all who live in it.\" (Psalm 24:1) We are not owners but "),
                    blank("ownership_2", "stewards"),
                    text(" of what He has entrusted to us."),
                ],
            ),
            section(
                "2. Honor God First",
                vec![
                    text("\"Honor the Lord with your "),
                    blank("first_1", "wealth"),
                    text(", with the "),
                    blank("first_2", "firstfruits"),
                    text(" of all your crops.\" (Proverbs 3:9) \"Bring the whole "),
                    blank("first_3", "tithe"),
                    text(" into the storehouse.\" (Malachi 3:10)"),
                ],
            ),
            section(
                "3. Give Cheerfully",
                vec![
                    text("\"Each of you should give what you have decided in your heart to give, not reluctantly or under compulsion, for God loves a "),
                    blank("giving_1", "cheerful"),
                    text(" giver.\" (2 Corinthians 9:7)"),
                ],
            ),
            section(
                "4. Avoid the Trap of Debt",
                vec![
                    text("\"The rich rule over the poor, and the borrower is "),
                    blank("debt_1", "slave"),
                    text(" to the lender.\" (Proverbs 22:7)"),
                ],
            ),
            section(
                "5. Be Faithful in Little",
                vec![
                    text("\"Whoever can be trusted with very "),
                    blank("faithful_1", "little"),
                    text(" can also be trusted with "),
                    blank("faithful_2", "much"),
                    text(".\" (Luke 16:10) Planning a budget is one way of being faithful with what we have."),
                ],
            ),
        ],
    }
}

/// Service for the devotional study
pub struct DevotionalService<'a> {
    storage: &'a Storage,
    study: DevotionalStudy,
}

impl<'a> DevotionalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self::with_study(storage, builtin_study())
    }

    pub fn with_study(storage: &'a Storage, study: DevotionalStudy) -> Self {
        Self { storage, study }
    }

    pub fn study(&self) -> &DevotionalStudy {
        &self.study
    }

    pub fn answers(&self) -> GraceResult<StudyAnswers> {
        self.storage.devotional_answers()
    }

    /// Record the answer for one blank
    ///
    /// An empty answer clears the blank.
    pub fn answer(&self, blank_id: &str, answer: &str) -> GraceResult<StudyAnswers> {
        if !self.study.has_blank(blank_id) {
            return Err(GraceError::Validation(format!("Unknown blank '{}'", blank_id)));
        }

        let before = self.answers()?;
        let mut after = before.clone();
        if answer.trim().is_empty() {
            after.remove(blank_id);
        } else {
            after.insert(blank_id.to_string(), answer.trim().to_string());
        }

        self.save(&before, &after)?;
        Ok(after)
    }

    pub fn score(&self) -> GraceResult<StudyScore> {
        Ok(self.study.score(&self.answers()?))
    }

    /// Forget every saved answer
    pub fn reset(&self) -> GraceResult<()> {
        let before = self.answers()?;
        self.save(&before, &StudyAnswers::new())?;
        info!(cleared = before.len(), "devotional answers reset");
        Ok(())
    }

    /// Rendered sections as `(title, body)`
    pub fn render(&self, review: bool) -> GraceResult<Vec<(String, String)>> {
        let answers = self.answers()?;
        Ok(self
            .study
            .sections
            .iter()
            .enumerate()
            .filter_map(|(index, section)| {
                self.study
                    .render_section(index, &answers, review)
                    .map(|body| (section.title.clone(), body))
            })
            .collect())
    }

    fn save(&self, before: &StudyAnswers, after: &StudyAnswers) -> GraceResult<()> {
        self.storage.set_devotional_answers(after)?;
        self.storage.audit(&AuditEntry::update(
            EntityType::DevotionalAnswers,
            self.study.title_key.clone(),
            None,
            before,
            after,
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_blank_ids_are_unique() {
        let study = builtin_study();
        let mut ids: Vec<&str> = study.blanks().map(|(id, _)| id).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert!(total > 0);
    }

    #[test]
    fn test_answer_and_score() {
        let storage = Storage::in_memory();
        let service = DevotionalService::new(&storage);
        let total = service.study().blanks().count();

        service.answer("first_3", " Tithe ").unwrap();
        service.answer("debt_1", "servant").unwrap();

        let score = service.score().unwrap();
        assert_eq!(score, StudyScore { correct: 1, total });
        assert_eq!(service.answers().unwrap()["first_3"], "Tithe");
    }

    #[test]
    fn test_unknown_blank_is_rejected() {
        let storage = Storage::in_memory();
        let service = DevotionalService::new(&storage);
        assert!(service.answer("nope", "x").unwrap_err().is_validation());
    }

    #[test]
    fn test_empty_answer_clears_and_reset() {
        let storage = Storage::in_memory();
        let service = DevotionalService::new(&storage);

        service.answer("giving_1", "cheerful").unwrap();
        service.answer("debt_1", "slave").unwrap();
        let answers = service.answer("giving_1", "  ").unwrap();
        assert!(!answers.contains_key("giving_1"));

        service.reset().unwrap();
        assert!(service.answers().unwrap().is_empty());
        assert_eq!(service.score().unwrap().correct, 0);
    }

    #[test]
    fn test_render_study_and_review_modes() {
        let storage = Storage::in_memory();
        let service = DevotionalService::new(&storage);
        service.answer("giving_1", "happy").unwrap();

        let study = service.render(false).unwrap();
        assert_eq!(study.len(), service.study().sections.len());
        assert!(study[2].1.contains("[happy] giver"));
        assert!(study[0].1.contains("____"));

        let review = service.render(true).unwrap();
        assert!(review[2].1.contains("[cheerful] giver"));
        assert!(!review[0].1.contains("____"));
    }
}
