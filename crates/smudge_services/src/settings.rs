//! Settings management
//!
//! Print settings live in a JSON document. Missing fields fall back to the
//! defaults: five-letter codes over the full alphabet with two letters shown.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use smudge_core::{CodeConfig, ConfigError, DEFAULT_PLACEHOLDER};
use thiserror::Error;

/// Errors produced while loading, saving or applying settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize settings")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid print settings")]
    Invalid(#[from] ConfigError),
}

/// Top-level settings document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub prints: PrintSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintSettings {
    /// Characters per code. Short codes make collisions between entities likely.
    pub code_length: usize,
    /// How many letters from `A` each position may use (at most 26).
    pub letters_per_digit: u32,
    pub placeholder: char,
    pub smudge: SmudgeSettings,
}

/// How many positions of a partial code are obscured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SmudgeSettings {
    /// Obscure between `min` and `max` positions, chosen per observation.
    Range { min: usize, max: usize },
    /// Keep exactly `amount_to_show` letters visible.
    Reveal { amount_to_show: usize },
}

impl SmudgeSettings {
    /// Smudge bounds for a code of `code_length` characters.
    pub fn bounds(&self, code_length: usize) -> (usize, usize) {
        match *self {
            SmudgeSettings::Range { min, max } => (min, max),
            SmudgeSettings::Reveal { amount_to_show } => {
                let hidden = code_length.saturating_sub(amount_to_show);
                (hidden, hidden)
            }
        }
    }
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            code_length: 5,
            letters_per_digit: 26,
            placeholder: DEFAULT_PLACEHOLDER,
            smudge: SmudgeSettings::Reveal { amount_to_show: 2 },
        }
    }
}

impl PrintSettings {
    /// Validate into an engine config.
    pub fn to_config(&self) -> Result<CodeConfig, ConfigError> {
        let (min, max) = self.smudge.bounds(self.code_length);
        let config = CodeConfig::new(self.code_length, self.letters_per_digit, min, max)?;
        if self.placeholder == DEFAULT_PLACEHOLDER {
            Ok(config)
        } else {
            config.with_placeholder(self.placeholder)
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load `path`, or fall back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Validated engine config for these settings.
    pub fn code_config(&self) -> Result<CodeConfig, SettingsError> {
        Ok(self.prints.to_config()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reveal_two_letters() {
        let config = Settings::default().code_config().unwrap();
        assert_eq!(config.code_length(), 5);
        assert_eq!(config.alphabet_size(), 26);
        assert_eq!((config.smudge_min(), config.smudge_max()), (3, 3));
    }

    #[test]
    fn reveal_more_than_length_hides_nothing() {
        assert_eq!(SmudgeSettings::Reveal { amount_to_show: 9 }.bounds(5), (0, 0));
    }

    #[test]
    fn parses_range_mode() {
        let settings = Settings::from_json(
            r#"{ "prints": { "code_length": 8, "smudge": { "mode": "range", "min": 2, "max": 4 } } }"#,
        )
        .unwrap();
        assert_eq!(settings.prints.code_length, 8);
        assert_eq!(settings.prints.letters_per_digit, 26);
        assert_eq!(settings.prints.smudge, SmudgeSettings::Range { min: 2, max: 4 });

        let config = settings.code_config().unwrap();
        assert_eq!((config.smudge_min(), config.smudge_max()), (2, 4));
    }

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn rejects_invalid_alphabet() {
        let settings = Settings::from_json(r#"{ "prints": { "letters_per_digit": 0 } }"#).unwrap();
        assert!(matches!(
            settings.code_config(),
            Err(SettingsError::Invalid(ConfigError::ZeroAlphabet))
        ));
    }

    #[test]
    fn custom_placeholder() {
        let settings = Settings::from_json(r#"{ "prints": { "placeholder": "?" } }"#).unwrap();
        assert_eq!(settings.code_config().unwrap().placeholder(), '?');

        let settings = Settings::from_json(r#"{ "prints": { "placeholder": "B" } }"#).unwrap();
        assert!(settings.code_config().is_err());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.prints.code_length = 7;
        settings.prints.smudge = SmudgeSettings::Range { min: 1, max: 3 };
        settings.save(&path).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn load_reports_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(Settings::load(&missing), Err(SettingsError::Io { .. })));
        assert_eq!(Settings::load_or_default(&missing).unwrap(), Settings::default());

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(Settings::load(&broken), Err(SettingsError::Parse { .. })));
    }
}
