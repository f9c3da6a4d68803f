use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

use crate::error::{QuizError, Result};
use crate::quiz::report::DEFAULT_EXPORT_FILE_NAME;

const DEFAULT_CONFIG_PATH: &str = "bike_quiz.toml";
const MAX_BAR_WIDTH: usize = 80;

/// Main configuration structure loaded from bike_quiz.toml and environment variables
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub quiz: QuizConfig,
    pub display: DisplayConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Quiz text and export destination
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct QuizConfig {
    pub title: String,
    pub export_file_name: String,
    /// Directory for exports; falls back to the user's download directory
    pub export_dir: Option<String>,
}

/// Terminal rendering knobs for the line-oriented CLI
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub bar_width: usize,
    pub bar_glyph: String,
    pub show_icons: bool,
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub log_level: String,
    pub no_log: bool,
    pub log_file: Option<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            title: crate::quiz::bank::QUIZ_TITLE.to_string(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            export_dir: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_width: 24,
            bar_glyph: "█".to_string(),
            show_icons: true,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "bike_quiz=info".to_string(),
            no_log: false,
            log_file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiz: QuizConfig::default(),
            display: DisplayConfig::default(),
            runtime: RuntimeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file and environment variables.
    ///
    /// Path precedence: `explicit_path`, then `BIKE_QUIZ_CONFIG`, then `bike_quiz.toml`.
    /// Only a missing default file falls back to defaults; any other read
    /// failure or malformed TOML is an error. Call `load_env` first so `.env`
    /// values are visible here.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config_path = explicit_path
            .map(|p| p.to_string_lossy().into_owned())
            .or_else(|| std::env::var("BIKE_QUIZ_CONFIG").ok())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let mut config = match read_config_file(&config_path, explicit_path.is_some())? {
            Some(content) => Self::from_toml_str(&content)?,
            None => {
                tracing::warn!("Config file {} not found, using defaults", config_path);
                Self::default()
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.runtime = RuntimeConfig::load_from_env();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `BIKE_QUIZ_*` overrides using the given lookup (env-first)
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("BIKE_QUIZ_EXPORT_DIR") {
            tracing::debug!("BIKE_QUIZ_EXPORT_DIR env override applied");
            self.quiz.export_dir = Some(dir);
        }
        if let Some(width) = lookup("BIKE_QUIZ_BAR_WIDTH").and_then(|v| v.parse::<usize>().ok()) {
            tracing::debug!("BIKE_QUIZ_BAR_WIDTH env override applied");
            self.display.bar_width = width;
        }
    }

    /// Validate and clamp values in place
    pub fn validate(&mut self) -> Result<()> {
        if self.display.bar_width == 0 {
            tracing::warn!("bar_width 0 is too small, clamping to 1");
            self.display.bar_width = 1;
        } else if self.display.bar_width > MAX_BAR_WIDTH {
            tracing::warn!(
                "bar_width {} exceeds max {}, clamping",
                self.display.bar_width,
                MAX_BAR_WIDTH
            );
            self.display.bar_width = MAX_BAR_WIDTH;
        }

        if self.display.bar_glyph.chars().count() != 1 {
            return Err(QuizError::Config {
                message: format!(
                    "bar_glyph must be a single character, got '{}'",
                    self.display.bar_glyph
                ),
            });
        }

        let name = self.quiz.export_file_name.trim();
        if name.is_empty() {
            return Err(QuizError::Config {
                message: "export_file_name cannot be empty".into(),
            });
        }
        if name.contains('/') || name.contains('\\') {
            return Err(QuizError::Config {
                message: format!(
                    "export_file_name '{}' must be a bare file name; use export_dir for the directory",
                    name
                ),
            });
        }

        Ok(())
    }
}

/// `Ok(None)` only when an optional file does not exist
fn read_config_file(path: &str, required: bool) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound && !required => Ok(None),
        Err(e) => Err(QuizError::Config {
            message: format!("config file {} could not be read: {}", path, e),
        }),
    }
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "bike_quiz=info".to_string()),
            no_log: std::env::var("BIKE_QUIZ_NO_LOG")
                .ok()
                .is_some_and(|v| v == "true" || v == "1"),
            log_file: std::env::var("BIKE_QUIZ_LOG_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_are_valid() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.quiz.export_file_name, "bike_quiz_result.txt");
        assert_eq!(config.display.bar_width, 24);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [display]
            bar_width = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.display.bar_width, 10);
        assert_eq!(config.display.bar_glyph, "█");
        assert!(config.quiz.export_dir.is_none());
        assert_eq!(config.quiz.title, "Which Part of the Bicycle Are You?");
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = Config::from_toml_str("[display\nbar_width = ").unwrap_err();
        assert!(matches!(err, QuizError::Config { .. }));
    }

    #[test]
    fn env_overrides_apply() {
        let vars: HashMap<&str, &str> = [
            ("BIKE_QUIZ_EXPORT_DIR", "/tmp/quiz-out"),
            ("BIKE_QUIZ_BAR_WIDTH", "40"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_overrides(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.quiz.export_dir.as_deref(), Some("/tmp/quiz-out"));
        assert_eq!(config.display.bar_width, 40);
    }

    #[test]
    fn unparsable_width_override_is_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(|k| (k == "BIKE_QUIZ_BAR_WIDTH").then(|| "wide".to_string()));
        assert_eq!(config.display.bar_width, 24);
    }

    #[test]
    fn validate_clamps_width() {
        let mut config = Config::default();
        config.display.bar_width = 500;
        config.validate().unwrap();
        assert_eq!(config.display.bar_width, 80);

        config.display.bar_width = 0;
        config.validate().unwrap();
        assert_eq!(config.display.bar_width, 1);
    }

    #[test]
    fn validate_rejects_bad_file_name_and_glyph() {
        let mut config = Config::default();
        config.quiz.export_file_name = "out/result.txt".into();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.quiz.export_file_name = "   ".into();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.display.bar_glyph = "##".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let path = std::env::temp_dir().join("bike_quiz_missing_config_for_test.toml");
        let _ = std::fs::remove_file(&path);
        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("could not be read"));
    }

    #[test]
    fn missing_optional_file_means_defaults() {
        let path = std::env::temp_dir().join("bike_quiz_absent_optional_config.toml");
        let _ = std::fs::remove_file(&path);
        let content = read_config_file(&path.to_string_lossy(), false).unwrap();
        assert!(content.is_none());
    }

    #[test]
    fn unreadable_optional_path_is_an_error() {
        let dir = std::env::temp_dir().join("bike_quiz_config_is_a_dir");
        std::fs::create_dir_all(&dir).unwrap();
        let err = read_config_file(&dir.to_string_lossy(), false).unwrap_err();
        assert!(matches!(err, QuizError::Config { .. }));
        assert!(err.to_string().contains("could not be read"));
    }
}
