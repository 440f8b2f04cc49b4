//! Devotional study display formatting

use crate::i18n::Translator;
use crate::models::StudyScore;

/// Format rendered `(title, body)` sections under the study title
pub fn format_study(title_key: &str, sections: &[(String, String)], review: bool, t: &Translator) -> String {
    let mode = if review { t.t("review_mode") } else { t.t("study_mode") };
    let mut output = format!("{} ({})\n", t.t(title_key), mode);
    output.push_str(&"=".repeat(60));
    output.push('\n');

    for (title, body) in sections {
        output.push_str(&format!("\n{}\n{}\n", title, body));
    }
    output
}

pub fn format_score(score: StudyScore, t: &Translator) -> String {
    format!("{}: {}/{}\n", t.t("score"), score.correct, score.total)
}
