//! Kana-game configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `typing_core::Config` (flattened via serde)
//! - Game options (phrase count, player name)
//! - History persistence format and an optional custom spelling table
//!
//! # Example
//!
//! ```rust
//! use libkana::KanaConfig;
//!
//! let config = KanaConfig::default();
//! assert_eq!(config.phrase_count, 10);
//! let base = config.into_base();
//! assert!(base.normalize_nfc);
//! ```
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How play history is written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryFormat {
    /// One pretty-printed JSON document holding every game.
    #[default]
    Json,
    /// One JSON record per line, appended after each game.
    Ndjson,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KanaConfig {
    /// Base configuration fields (normalization, ASCII passthrough, limits)
    #[serde(flatten)]
    pub base: typing_core::Config,

    /// Phrases per game
    pub phrase_count: usize,

    /// Name recorded in a new history file
    pub username: String,

    pub history_format: HistoryFormat,

    /// TOML spelling table to use instead of the built-in kana table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_path: Option<PathBuf>,
}

impl Default for KanaConfig {
    fn default() -> Self {
        Self {
            base: typing_core::Config::default(),
            phrase_count: 10,
            username: crate::history::DEFAULT_USERNAME.to_string(),
            history_format: HistoryFormat::Json,
            table_path: None,
        }
    }
}

impl KanaConfig {
    /// Convert this kana config into the base config
    pub fn into_base(self) -> typing_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &typing_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut typing_core::Config {
        &mut self.base
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattened_base_fields_parse() {
        let cfg = KanaConfig::from_toml_str(
            r#"
            max_phrase_len = 100
            phrase_count = 3
            history_format = "ndjson"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.base().max_phrase_len, 100);
        assert!(cfg.base().ascii_passthrough);
        assert_eq!(cfg.phrase_count, 3);
        assert_eq!(cfg.history_format, HistoryFormat::Ndjson);
        assert_eq!(cfg.username, "No Name");
    }

    #[test]
    fn toml_roundtrip() {
        let mut cfg = KanaConfig::default();
        cfg.username = "たろう".into();
        cfg.base_mut().normalize_nfc = false;
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(KanaConfig::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn save_then_load_file() {
        let path = std::env::temp_dir().join(format!("libkana_{}_config.toml", std::process::id()));
        let mut cfg = KanaConfig::default();
        cfg.phrase_count = 4;
        cfg.history_format = HistoryFormat::Ndjson;
        cfg.save_toml(&path).unwrap();
        assert_eq!(KanaConfig::load_toml(&path).unwrap(), cfg);
        std::fs::remove_file(&path).ok();
    }
}
