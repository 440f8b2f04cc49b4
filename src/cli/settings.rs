//! Settings CLI commands

use clap::Subcommand;

use crate::config::{Currency, GracePaths, Settings, Theme};
use crate::error::GraceResult;
use crate::i18n::{Language, Translator};

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,
    /// Set the color theme (light, dark)
    Theme { theme: String },
    /// Set the display language (sv, es, en, fr)
    Language { language: String },
    /// Set the currency (USD, EUR, SEK, CAD)
    Currency { currency: String },
    /// Set the name used in the dashboard greeting
    Name { name: String },
}

fn print_settings(settings: &Settings) {
    let t = Translator::new(settings.language);
    println!("{}", t.t("settings"));
    println!("  {:12} {}", t.t("name"), settings.user_name);
    println!("  {:12} {}", t.t("language"), settings.language.native_name());
    println!("  {:12} {} ({})", t.t("currency"), settings.currency.code(), settings.currency.symbol());
    println!("  {:12} {}", t.t("theme"), t.t(settings.theme.label_key()));
}

/// Handle a settings command, saving any change
pub fn handle_settings_command(paths: &GracePaths, settings: &mut Settings, cmd: SettingsCommands) -> GraceResult<()> {
    match cmd {
        SettingsCommands::Show => {
            print_settings(settings);
            return Ok(());
        }
        SettingsCommands::Theme { theme } => settings.theme = theme.parse::<Theme>()?,
        SettingsCommands::Language { language } => settings.language = language.parse::<Language>()?,
        SettingsCommands::Currency { currency } => settings.currency = currency.parse::<Currency>()?,
        SettingsCommands::Name { name } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(crate::error::GraceError::Validation("Name cannot be empty".into()));
            }
            settings.user_name = name.to_string();
        }
    }

    settings.save(paths)?;
    tracing::info!(path = %paths.settings_file().display(), "settings saved");
    print_settings(settings);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_changes_are_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GracePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        handle_settings_command(&paths, &mut settings, SettingsCommands::Currency { currency: "usd".into() }).unwrap();
        handle_settings_command(&paths, &mut settings, SettingsCommands::Language { language: "fr".into() }).unwrap();

        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.currency, Currency::Usd);
        assert_eq!(reloaded.language, Language::Fr);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GracePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        let err = handle_settings_command(&paths, &mut settings, SettingsCommands::Theme { theme: "neon".into() })
            .unwrap_err();
        assert!(err.is_validation());
        assert!(!paths.settings_file().exists());
    }
}
