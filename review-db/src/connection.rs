//! Database connection and configuration

use crate::error::Result;
use review_core::DatabaseSettings;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

const INITIAL_SCHEMA: &str = include_str!("../migrations/001_initial_schema.sql");

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to SQLite database file
    pub path: PathBuf,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from(&DatabaseSettings::default())
    }
}

impl From<&DatabaseSettings> for DatabaseConfig {
    fn from(settings: &DatabaseSettings) -> Self {
        Self {
            path: settings.path.clone(),
            max_connections: settings.max_connections,
        }
    }
}

impl DatabaseConfig {
    /// Create a new database config with the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: 5,
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

/// Database connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database with the given configuration
    pub async fn connect(config: DatabaseConfig) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = config.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let options =
            SqliteConnectOptions::from_str(&format!("sqlite://{}", config.path.display()))?
                .create_if_missing(true)
                .foreign_keys(true)
                .disable_statement_logging();

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        debug!(path = %config.path.display(), "Connected to database");

        Ok(Self { pool })
    }

    /// Create the schema if it does not exist yet
    pub async fn migrate(&self) -> Result<()> {
        sqlx::raw_sql(INITIAL_SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection
    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_database_connection() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("test.db");

        let config = DatabaseConfig::new(&db_path);
        let db = Database::connect(config).await.unwrap();
        db.migrate().await.unwrap();

        assert!(db_path.exists());
        db.close().await;
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let config = DatabaseConfig::new(temp_dir.path().join("test.db"));
        let db = Database::connect(config).await.unwrap();

        db.migrate().await.unwrap();
        db.migrate().await.unwrap();

        for table in ["users", "api_tokens", "reviews"] {
            let result: (i64,) = sqlx::query_as(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?",
            )
            .bind(table)
            .fetch_one(db.pool())
            .await
            .unwrap();
            assert_eq!(result.0, 1, "missing table {}", table);
        }
    }

    #[test]
    fn test_config_from_settings() {
        let settings = DatabaseSettings {
            path: PathBuf::from("/srv/reviews.db"),
            max_connections: 9,
        };
        let config = DatabaseConfig::from(&settings);
        assert_eq!(config.path, PathBuf::from("/srv/reviews.db"));
        assert_eq!(config.max_connections, 9);
    }
}
