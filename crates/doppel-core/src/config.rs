//! Application configuration.
//!
//! Every field has a default, so a missing file or a partial one is fine.
//! The desktop binary loads the file first and then applies CLI overrides.
//!
//! ```json
//! { "sync_delay_ms": 1500, "initial_mood": 70 }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DoppelError, DoppelResult};
use crate::store::DEFAULT_MOOD;

pub const DEFAULT_SYNC_DELAY_MS: u64 = 3000;
pub const DEFAULT_CHAT_REPLY_DELAY_MS: u64 = 2000;
pub const DEFAULT_NOTICE_LIMIT: usize = 3;

/// Longest simulated delay accepted from a config file
const MAX_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How long the sync flag stays up after "Sync Now"
    pub sync_delay_ms: u64,
    /// How long the twin "types" before replying
    pub chat_reply_delay_ms: u64,
    /// Mood the dashboard opens with
    pub initial_mood: f64,
    /// Toasts kept on screen at once
    pub notice_limit: usize,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sync_delay_ms: DEFAULT_SYNC_DELAY_MS,
            chat_reply_delay_ms: DEFAULT_CHAT_REPLY_DELAY_MS,
            initial_mood: DEFAULT_MOOD,
            notice_limit: DEFAULT_NOTICE_LIMIT,
            window_title: "Doppel - Your Digital Twin".to_string(),
        }
    }
}

impl AppConfig {
    /// Default location: `<config dir>/doppel/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("doppel").join("config.json"))
    }

    /// Load from a JSON file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> DoppelResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&text)
            .map_err(|e| DoppelError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> DoppelResult<()> {
        for (name, value) in [
            ("sync_delay_ms", self.sync_delay_ms),
            ("chat_reply_delay_ms", self.chat_reply_delay_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(DoppelError::Config(format!(
                    "{} is {}, maximum is {}",
                    name, value, MAX_DELAY_MS
                )));
            }
        }
        if !(0.0..=100.0).contains(&self.initial_mood) {
            return Err(DoppelError::Config(format!(
                "initial_mood is {}, expected 0..=100",
                self.initial_mood
            )));
        }
        if self.notice_limit == 0 {
            return Err(DoppelError::Config("notice_limit must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn sync_delay(&self) -> Duration {
        Duration::from_millis(self.sync_delay_ms)
    }

    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.sync_delay(), Duration::from_secs(3));
        assert_eq!(config.chat_reply_delay(), Duration::from_secs(2));
        assert_eq!(config.initial_mood, 82.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "sync_delay_ms": 500, "initial_mood": 60 }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.sync_delay_ms, 500);
        assert_eq!(config.initial_mood, 60.0);
        assert_eq!(config.chat_reply_delay_ms, DEFAULT_CHAT_REPLY_DELAY_MS);
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "sync_delay_ms = 5").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, DoppelError::Config(_)));
    }

    #[test]
    fn test_out_of_range_values() {
        let config = AppConfig {
            sync_delay_ms: 120_000,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            initial_mood: 101.0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            notice_limit: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
