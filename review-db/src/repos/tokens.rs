//! API token repository
//!
//! Tokens are the authentication collaborator for the HTTP API: a request
//! carrying a known key acts as the token's user.

use crate::error::Result;
use crate::models::ApiToken;
use chrono::Utc;
use review_core::Identity;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Repository for API tokens
pub struct TokenRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TokenRepository<'a> {
    /// Create a new token repository
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the user's token, issuing one if they have none
    pub async fn get_or_create(&self, user_id: i64) -> Result<ApiToken> {
        let key = Uuid::new_v4().simple().to_string();

        sqlx::query("INSERT OR IGNORE INTO api_tokens (key, user_id, created_at) VALUES (?, ?, ?)")
            .bind(&key)
            .bind(user_id)
            .bind(Utc::now())
            .execute(self.pool)
            .await?;

        sqlx::query_as::<_, ApiToken>(
            "SELECT key, user_id, created_at FROM api_tokens WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_one(self.pool)
        .await
        .map_err(Into::into)
    }

    /// Resolve a token key to the identity it authenticates
    pub async fn find_identity(&self, key: &str) -> Result<Option<Identity>> {
        let row: Option<(i64, String)> = sqlx::query_as(
            r#"
            SELECT u.id, u.username FROM api_tokens t
            INNER JOIN users u ON u.id = t.user_id
            WHERE t.key = ?
            "#,
        )
        .bind(key)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|(id, username)| Identity::new(id, username)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::test_support::setup_test_db;
    use crate::repos::UserRepository;

    #[tokio::test]
    async fn test_token_is_stable_per_user() {
        let (db, _temp) = setup_test_db().await;
        let user = UserRepository::new(db.pool()).create("test").await.unwrap();
        let repo = TokenRepository::new(db.pool());

        let first = repo.get_or_create(user.id).await.unwrap();
        let second = repo.get_or_create(user.id).await.unwrap();

        assert_eq!(first.key, second.key);
        assert_eq!(first.key.len(), 32);
        assert!(first.key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_find_identity() {
        let (db, _temp) = setup_test_db().await;
        let user = UserRepository::new(db.pool()).create("test").await.unwrap();
        let repo = TokenRepository::new(db.pool());
        let token = repo.get_or_create(user.id).await.unwrap();

        let identity = repo.find_identity(&token.key).await.unwrap();
        assert_eq!(identity, Some(Identity::new(user.id, "test")));

        assert_eq!(repo.find_identity("deadbeef").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_distinct_users_get_distinct_tokens() {
        let (db, _temp) = setup_test_db().await;
        let users = UserRepository::new(db.pool());
        let a = users.create("a").await.unwrap();
        let b = users.create("b").await.unwrap();
        let repo = TokenRepository::new(db.pool());

        let ta = repo.get_or_create(a.id).await.unwrap();
        let tb = repo.get_or_create(b.id).await.unwrap();
        assert_ne!(ta.key, tb.key);
    }
}
