//! User repository

use crate::error::{DbError, Result};
use crate::models::User;
use chrono::Utc;
use sqlx::SqlitePool;

/// Repository for user accounts
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new user
    pub async fn create(&self, username: &str) -> Result<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DbError::InvalidData("Username may not be blank".to_string()));
        }

        let result = sqlx::query("INSERT INTO users (username, created_at) VALUES (?, ?)")
            .bind(username)
            .bind(Utc::now())
            .execute(self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DbError::UsernameTaken(username.to_string())
                }
                e => e.into(),
            })?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    /// Get a user by internal ID
    pub async fn get_by_id(&self, id: i64) -> Result<User> {
        sqlx::query_as::<_, User>("SELECT id, username, created_at FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => DbError::UserNotFound(format!("#{}", id)),
                e => e.into(),
            })
    }

    /// Get a user by username
    pub async fn get_by_username(&self, username: &str) -> Result<User> {
        sqlx::query_as::<_, User>("SELECT id, username, created_at FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => DbError::UserNotFound(username.to_string()),
                e => e.into(),
            })
    }

    /// List all users, oldest first
    pub async fn list(&self) -> Result<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT id, username, created_at FROM users ORDER BY id ASC")
            .fetch_all(self.pool)
            .await
            .map_err(Into::into)
    }
}
