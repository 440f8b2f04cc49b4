//! Devotional study model
//!
//! A study is a list of sections; each section mixes literal text with blanks
//! the reader fills in. Answers are kept separately, keyed by blank id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One piece of a section's body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StudyPart {
    Text { value: String },
    Blank { id: String, answer: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySection {
    pub title: String,
    pub content: Vec<StudyPart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevotionalStudy {
    /// Translation key of the study's title
    pub title_key: String,
    pub sections: Vec<StudySection>,
}

/// User answers keyed by blank id
pub type StudyAnswers = BTreeMap<String, String>;

/// Correct answers out of total blanks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyScore {
    pub correct: usize,
    pub total: usize,
}

impl DevotionalStudy {
    /// Iterate over every blank as `(id, answer)`
    pub fn blanks(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sections
            .iter()
            .flat_map(|s| s.content.iter())
            .filter_map(|part| match part {
                StudyPart::Blank { id, answer } => Some((id.as_str(), answer.as_str())),
                StudyPart::Text { .. } => None,
            })
    }

    pub fn has_blank(&self, id: &str) -> bool {
        self.blanks().any(|(blank_id, _)| blank_id == id)
    }

    /// Count answers matching the expected text, ignoring case and
    /// surrounding whitespace
    pub fn score(&self, answers: &StudyAnswers) -> StudyScore {
        let mut score = StudyScore { correct: 0, total: 0 };
        for (id, expected) in self.blanks() {
            score.total += 1;
            if let Some(given) = answers.get(id) {
                if answers_match(given, expected) {
                    score.correct += 1;
                }
            }
        }
        score
    }

    /// Render one section as plain text
    ///
    /// In review mode blanks show the correct answer; otherwise they show the
    /// user's answer, or `____` when unanswered.
    pub fn render_section(&self, index: usize, answers: &StudyAnswers, review: bool) -> Option<String> {
        let section = self.sections.get(index)?;
        let body: String = section
            .content
            .iter()
            .map(|part| match part {
                StudyPart::Text { value } => value.clone(),
                StudyPart::Blank { answer, .. } if review => format!("[{}]", answer),
                StudyPart::Blank { id, .. } => match answers.get(id) {
                    Some(given) if !given.trim().is_empty() => format!("[{}]", given.trim()),
                    _ => "____".to_string(),
                },
            })
            .collect();
        Some(body)
    }
}

pub fn answers_match(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn study() -> DevotionalStudy {
        DevotionalStudy {
            title_key: "financial_study".into(),
            sections: vec![StudySection {
                title: "Honor".into(),
                content: vec![
                    StudyPart::Text { value: "Honor the Lord with your ".into() },
                    StudyPart::Blank { id: "b1".into(), answer: "wealth".into() },
                    StudyPart::Text { value: " and ".into() },
                    StudyPart::Blank { id: "b2".into(), answer: "firstfruits".into() },
                ],
            }],
        }
    }

    #[test]
    fn test_score_ignores_case_and_whitespace() {
        let mut answers = StudyAnswers::new();
        answers.insert("b1".into(), "  Wealth ".into());
        answers.insert("b2".into(), "fruit".into());
        assert_eq!(study().score(&answers), StudyScore { correct: 1, total: 2 });
    }

    #[test]
    fn test_render_study_and_review() {
        let mut answers = StudyAnswers::new();
        answers.insert("b1".into(), "wealth".into());
        let s = study();

        assert_eq!(
            s.render_section(0, &answers, false).unwrap(),
            "Honor the Lord with your [wealth] and ____"
        );
        assert_eq!(
            s.render_section(0, &answers, true).unwrap(),
            "Honor the Lord with your [wealth] and [firstfruits]"
        );
        assert!(s.render_section(5, &answers, true).is_none());
    }

    #[test]
    fn test_part_serialization_is_tagged() {
        let part = StudyPart::Blank { id: "b1".into(), answer: "x".into() };
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["type"], "blank");
    }
}
