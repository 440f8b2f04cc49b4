//! Localization lookup
//!
//! Display strings are resolved through [`translate`], which falls back to the
//! key itself when the active language has no mapping. Placeholders such as
//! `{spent}` and `{total}` are filled by [`format_placeholders`].

mod translations;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraceError;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    #[default]
    Sv,
    Fr,
}

impl Language {
    pub const ALL: [Language; 4] = [Self::Sv, Self::Es, Self::En, Self::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Sv => "sv",
            Self::Fr => "fr",
        }
    }

    /// The language's name in its own language
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Sv => "Svenska",
            Self::Fr => "Français",
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => translations::ENGLISH,
            Self::Es => translations::SPANISH,
            Self::Sv => translations::SWEDISH,
            Self::Fr => translations::FRENCH,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = GraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.code() == wanted)
            .ok_or_else(|| {
                GraceError::Validation(format!(
                    "Unknown language '{}': expected one of sv, es, en, fr",
                    s.trim()
                ))
            })
    }
}

/// Look up `key` in the language's table, returning the key when unmapped
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    language
        .table()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

/// Replace each `{name}` in `template` with its value
pub fn format_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{}}}", name), value)
        })
}

/// Translator bound to a single language
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_key() {
        assert_eq!(translate(Language::En, "calendar"), "Calendar");
        assert_eq!(translate(Language::Sv, "calendar"), "Kalender");
        assert_eq!(translate(Language::Es, "first_fruits"), "Primicias");
        assert_eq!(translate(Language::Fr, "dark_mode"), "Mode sombre");
    }

    #[test]
    fn test_translate_falls_back_to_key() {
        assert_eq!(translate(Language::En, "not_a_key"), "not_a_key");
    }

    #[test]
    fn test_every_language_has_the_same_keys() {
        let english: Vec<&str> = Language::En.table().iter().map(|(k, _)| *k).collect();
        for language in Language::ALL {
            let keys: Vec<&str> = language.table().iter().map(|(k, _)| *k).collect();
            assert_eq!(keys, english, "key mismatch for {}", language);
        }
    }

    #[test]
    fn test_format_placeholders() {
        let template = translate(Language::En, "spent_of");
        let text = format_placeholders(template, &[("spent", "$10.00"), ("total", "$50.00")]);
        assert_eq!(text, "$10.00 of $50.00");
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("SV".parse::<Language>().unwrap(), Language::Sv);
        assert!("de".parse::<Language>().is_err());
    }
}
