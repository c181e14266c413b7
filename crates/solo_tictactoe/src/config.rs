//! Engine configuration.

use super::session::SESSION_LIMIT;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a game session.
///
/// ```toml
/// session_limit = 10
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rounds per session.
    #[serde(default = "default_session_limit")]
    session_limit: u32,

    /// Seed for a reproducible session. Drawn from OS entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_session_limit() -> u32 {
    SESSION_LIMIT
}

impl EngineConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(session_limit: u32, seed: Option<u64>) -> Self {
        Self {
            session_limit,
            seed,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            session_limit = config.session_limit,
            seed = ?config.seed,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the session limit.
    pub fn with_session_limit(mut self, session_limit: u32) -> Self {
        self.session_limit = session_limit;
        self
    }

    /// Rejects settings the engine cannot run with.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_limit == 0 {
            return Err(ConfigError::new(
                "session_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(SESSION_LIMIT, None)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_missing() {
        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(*config.session_limit(), 10);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_parse_all_fields() {
        let config = EngineConfig::from_toml("session_limit = 3\nseed = 99\n").unwrap();
        assert_eq!(*config.session_limit(), 3);
        assert_eq!(*config.seed(), Some(99));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = EngineConfig::from_toml("session_limit = 0").unwrap_err();
        assert!(err.message.contains("at least 1"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = EngineConfig::from_toml("session_limit = \"ten\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
