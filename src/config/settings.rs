//! User settings for GraceHome
//!
//! Manages user preferences: colour theme, display language, currency and
//! the name used in the dashboard greeting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::paths::GracePaths;
use crate::error::GraceError;
use crate::i18n::Language;

/// Colour theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Translation key for the theme's display label
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Light => "light_mode",
            Self::Dark => "dark_mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = GraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(GraceError::Validation(format!(
                "Unknown theme '{}': expected light or dark",
                other
            ))),
        }
    }
}

/// Display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    #[default]
    Sek,
    Cad,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Self::Usd, Self::Eur, Self::Sek, Self::Cad];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Sek => "SEK",
            Self::Cad => "CAD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Sek => "kr",
            Self::Cad => "C$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = GraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code() == wanted)
            .ok_or_else(|| {
                GraceError::Validation(format!(
                    "Unknown currency '{}': expected one of USD, EUR, SEK, CAD",
                    s.trim()
                ))
            })
    }
}

/// User settings for GraceHome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub currency: Currency,

    /// Name shown in the dashboard greeting
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// Model used for the daily verse
    #[serde(default = "default_verse_model")]
    pub verse_model: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_user_name() -> String {
    "Family".to_string()
}

fn default_verse_model() -> String {
    "gemini-2.5-flash".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            theme: Theme::default(),
            language: Language::default(),
            currency: Currency::default(),
            user_name: default_user_name(),
            verse_model: default_verse_model(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &GracePaths) -> Result<Self, GraceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| GraceError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                GraceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GracePaths) -> Result<(), GraceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| GraceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| GraceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
