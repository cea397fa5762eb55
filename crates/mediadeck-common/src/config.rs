//! Player configuration loaded from an optional TOML file

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid value for `{key}`: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Level names accepted by the log filter
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// What `toggle_subtitles` does while a video is playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubtitleToggle {
    /// Re-show subtitles on every toggle, whatever their visibility
    #[default]
    AlwaysShow,
    /// Hide when visible, show when hidden
    Flip,
}

/// Defaults applied by the facade when it starts playback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub default_volume: i32,
    pub default_resolution: String,
    pub subtitle_language: String,
    /// Extension of the subtitle file derived from a video reference
    pub subtitle_extension: String,
    pub subtitle_toggle: SubtitleToggle,
    pub log_level: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            default_volume: 80,
            default_resolution: "1080p".to_string(),
            subtitle_language: "Spanish".to_string(),
            subtitle_extension: "srt".to_string(),
            subtitle_toggle: SubtitleToggle::AlwaysShow,
            log_level: "info".to_string(),
        }
    }
}

impl PlayerConfig {
    /// Read and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading config from {:?}", path);
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0..=100).contains(&self.default_volume) {
            return Err(ConfigError::InvalidValue {
                key: "default_volume",
                reason: format!("{} is outside 0-100", self.default_volume),
            });
        }

        let required = [
            ("default_resolution", &self.default_resolution),
            ("subtitle_language", &self.subtitle_language),
            ("subtitle_extension", &self.subtitle_extension),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key,
                    reason: "must not be empty".to_string(),
                });
            }
        }

        if self.subtitle_extension.trim_start_matches('.').is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "subtitle_extension",
                reason: "must name an extension".to_string(),
            });
        }

        if !LOG_LEVELS.contains(&self.log_level().as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "log_level",
                reason: format!("{:?} is not one of {}", self.log_level, LOG_LEVELS.join("/")),
            });
        }

        Ok(())
    }

    /// Log level trimmed and lowercased, ready for the log filter
    pub fn log_level(&self) -> String {
        self.log_level.trim().to_ascii_lowercase()
    }

    /// Subtitle extension without a leading dot
    pub fn subtitle_extension(&self) -> &str {
        self.subtitle_extension.trim_start_matches('.')
    }
}
