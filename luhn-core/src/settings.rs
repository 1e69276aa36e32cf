//! Stored summarizer settings.
//!
//! Settings come from layered sources (built-in defaults, an optional
//! `luhn.toml`, then `LUHN__*` environment variables) and are sanitized the
//! same way whatever their origin:
//! - `sentence_count` below 1 resets to 3
//! - `language` outside `en`/`ru` resets to `en`

use std::path::Path;

use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use luhn_types::{Language, SummarizerConfig, DEFAULT_SENTENCE_COUNT};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Settings file looked up in the working directory (any supported extension).
pub const SETTINGS_FILE: &str = "luhn";

/// Prefix of environment overrides, e.g. `LUHN__SENTENCE_COUNT=5`.
pub const ENV_PREFIX: &str = "LUHN";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Build(#[from] config::ConfigError),
}

/// Sanitized settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub sentence_count: usize,
    pub auto_generate: bool,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sentence_count: DEFAULT_SENTENCE_COUNT,
            auto_generate: true,
            language: Language::English,
        }
    }
}

/// Settings as stored, before sanitization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSettings {
    pub sentence_count: i64,
    pub auto_generate: bool,
    pub language: String,
}

impl From<RawSettings> for Settings {
    fn from(raw: RawSettings) -> Self {
        let sentence_count = usize::try_from(raw.sentence_count)
            .ok()
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_SENTENCE_COUNT);

        let language = if Language::is_supported(&raw.language) {
            Language::from_code(&raw.language)
        } else {
            Language::English
        };

        Self {
            sentence_count,
            auto_generate: raw.auto_generate,
            language,
        }
    }
}

impl Settings {
    /// Engine configuration derived from these settings.
    pub fn summarizer_config(&self) -> SummarizerConfig {
        SummarizerConfig::new(self.language, self.sentence_count)
    }
}

/// Loads settings from defaults, `luhn.toml` (optional) and the environment.
pub fn load() -> Result<Settings, SettingsError> {
    let builder = defaults()?
        .add_source(File::with_name(SETTINGS_FILE).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));
    finish(builder)
}

/// Loads settings from an explicit file, then the environment.
pub fn load_from(path: &Path) -> Result<Settings, SettingsError> {
    let builder = defaults()?
        .add_source(File::from(path).required(true))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));
    finish(builder)
}

/// Parses settings from TOML text over the defaults.
pub fn from_toml(source: &str) -> Result<Settings, SettingsError> {
    let builder = defaults()?.add_source(File::from_str(source, FileFormat::Toml));
    finish(builder)
}

fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, SettingsError> {
    let defaults = Settings::default();
    Ok(Config::builder()
        .set_default("sentence_count", defaults.sentence_count as i64)?
        .set_default("auto_generate", defaults.auto_generate)?
        .set_default("language", defaults.language.code())?)
}

fn finish(builder: ConfigBuilder<config::builder::DefaultState>) -> Result<Settings, SettingsError> {
    let raw: RawSettings = builder.build()?.try_deserialize()?;
    debug!(?raw, "loaded stored settings");
    Ok(Settings::from(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let settings = from_toml("").expect("empty toml is valid");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.sentence_count, 3);
        assert!(settings.auto_generate);
        assert_eq!(settings.language, Language::English);
    }

    #[test]
    fn values_read_from_toml() {
        let settings = from_toml(
            r#"
            sentence_count = 5
            auto_generate = false
            language = "ru"
            "#,
        )
        .expect("valid toml");
        assert_eq!(
            settings,
            Settings {
                sentence_count: 5,
                auto_generate: false,
                language: Language::Russian,
            }
        );
    }

    #[test]
    fn non_positive_count_resets_to_default() {
        let zero = from_toml("sentence_count = 0").expect("valid toml");
        assert_eq!(zero.sentence_count, 3);

        let negative = from_toml("sentence_count = -4").expect("valid toml");
        assert_eq!(negative.sentence_count, 3);
    }

    #[test]
    fn unsupported_language_resets_to_english() {
        let settings = from_toml(r#"language = "de""#).expect("valid toml");
        assert_eq!(settings.language, Language::English);

        let settings = from_toml(r#"language = "RU""#).expect("valid toml");
        assert_eq!(settings.language, Language::English);
    }

    #[test]
    fn malformed_value_is_an_error() {
        assert!(from_toml(r#"sentence_count = "many""#).is_err());
        assert!(from_toml("sentence_count = ").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = Path::new("/nonexistent/luhn-settings.toml");
        assert!(load_from(path).is_err());
    }

    #[test]
    fn summarizer_config_carries_values() {
        let settings = Settings {
            sentence_count: 2,
            auto_generate: true,
            language: Language::Russian,
        };
        assert_eq!(
            settings.summarizer_config(),
            SummarizerConfig::new(Language::Russian, 2)
        );
    }
}
