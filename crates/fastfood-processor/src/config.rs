//! Processor configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::path::PathBuf;

use fastfood_db::DbConfig;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "./fastfood.db";

/// Default pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file (`FASTFOOD_DB_PATH`)
    pub db_path: PathBuf,

    /// Maximum pool connections (`FASTFOOD_MAX_CONNECTIONS`)
    pub max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = AppConfig {
            db_path: lookup("FASTFOOD_DB_PATH")
                .unwrap_or_else(|| DEFAULT_DB_PATH.to_string())
                .into(),

            max_connections: lookup("FASTFOOD_MAX_CONNECTIONS")
                .unwrap_or_else(|| DEFAULT_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FASTFOOD_MAX_CONNECTIONS".to_string()))?,
        };

        if config.db_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue("FASTFOOD_DB_PATH".to_string()));
        }

        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "FASTFOOD_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(config)
    }

    /// Replaces the database path (CLI `--db`).
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    /// Database configuration for this app config.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.db_path).max_connections(self.max_connections)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.db_path, PathBuf::from("./fastfood.db"));
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("FASTFOOD_DB_PATH", "/tmp/shop.db"),
            ("FASTFOOD_MAX_CONNECTIONS", "8"),
        ]))
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/tmp/shop.db"));
        assert_eq!(config.max_connections, 8);
        assert_eq!(config.db_config().max_connections, 8);
    }

    #[test]
    fn test_invalid_values() {
        for value in ["many", "0", "-1"] {
            let err =
                AppConfig::from_lookup(lookup(&[("FASTFOOD_MAX_CONNECTIONS", value)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "FASTFOOD_MAX_CONNECTIONS"));
        }

        let err = AppConfig::from_lookup(lookup(&[("FASTFOOD_DB_PATH", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_cli_path_override() {
        let config = AppConfig::default().with_db_path("other.db");
        assert_eq!(config.db_path, PathBuf::from("other.db"));
        assert_eq!(config.db_config().database_path, PathBuf::from("other.db"));
    }
}
