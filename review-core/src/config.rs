//! Configuration management for the review service
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (REVIEWD_*)
//! 3. Config file (~/.config/reviewd/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the API listens on
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Path to the SQLite database file
    pub path: PathBuf,

    /// Maximum number of pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            max_connections: 5,
        }
    }
}

impl DatabaseSettings {
    /// Default database location: `~/.cache/reviewd/reviews.db`
    pub fn default_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("reviewd")
            .join("reviews.db")
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseSettings,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading configuration file");
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/reviewd/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("reviewd").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - REVIEWD_BIND: Address the API listens on
    /// - REVIEWD_DATABASE: Path to the SQLite database
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(bind) = std::env::var("REVIEWD_BIND") {
            self.server.bind = bind;
        }

        if let Ok(path) = std::env::var("REVIEWD_DATABASE") {
            self.database.path = PathBuf::from(path);
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, bind: Option<String>, database: Option<PathBuf>) -> Self {
        if let Some(bind) = bind {
            self.server.bind = bind;
        }

        if let Some(path) = database {
            self.database.path = path;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(bind: Option<String>, database: Option<PathBuf>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(bind, database))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.bind, "127.0.0.1:8000");
        assert_eq!(config.database.max_connections, 5);
        assert!(config.database.path.ends_with("reviewd/reviews.db"));
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default().with_cli_overrides(
            Some("0.0.0.0:9000".to_string()),
            Some(PathBuf::from("/tmp/reviews.db")),
        );

        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.database.path, PathBuf::from("/tmp/reviews.db"));
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[server]
bind = "0.0.0.0:8080"

[database]
path = "/var/lib/reviewd/reviews.db"
max_connections = 10
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(
            config.database.path,
            PathBuf::from("/var/lib/reviewd/reviews.db")
        );
        assert_eq!(config.database.max_connections, 10);
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[database]
max_connections = 2
"#;
        let config: Config = toml::from_str(toml).unwrap();
        // bind should use default
        assert_eq!(config.server.bind, "127.0.0.1:8000");
        assert_eq!(config.database.max_connections, 2);
    }

    #[test]
    fn test_load_from_file_rejects_bad_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nbind = ").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
