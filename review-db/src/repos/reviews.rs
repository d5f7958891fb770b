//! Review repository
//!
//! Reviews are insert-only: there is deliberately no update or delete here.

use crate::error::{DbError, Result};
use crate::models::ReviewRow;
use chrono::Utc;
use review_core::{NewReview, Review};
use sqlx::SqlitePool;

const SELECT_REVIEWS: &str = r#"
    SELECT r.id, r.reviewer_id, u.username AS reviewer_username, r.company_name,
           r.rating, r.title, r.summary, r.ip_address, r.created_at
    FROM reviews r
    INNER JOIN users u ON u.id = r.reviewer_id
"#;

/// Repository for company reviews
pub struct ReviewRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a review, stamping its creation time
    pub async fn create(&self, review: &NewReview) -> Result<Review> {
        let result = sqlx::query(
            r#"
            INSERT INTO reviews (
                reviewer_id, company_name, rating, title, summary, ip_address, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(review.reviewer_id)
        .bind(&review.company_name)
        .bind(i64::from(review.rating))
        .bind(&review.title)
        .bind(&review.summary)
        .bind(review.ip_address.map(|ip| ip.to_string()))
        .bind(Utc::now())
        .execute(self.pool)
        .await?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    /// Get a review by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Review> {
        self.find_by_id(id).await?.ok_or(DbError::ReviewNotFound(id))
    }

    /// Look up a review by ID, regardless of who submitted it
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Review>> {
        let query = format!("{} WHERE r.id = ?", SELECT_REVIEWS);
        sqlx::query_as::<_, ReviewRow>(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .map(Review::try_from)
            .transpose()
    }

    /// List the reviews submitted by one user, newest first
    pub async fn list_by_reviewer(&self, reviewer_id: i64) -> Result<Vec<Review>> {
        let query = format!(
            "{} WHERE r.reviewer_id = ? ORDER BY r.created_at DESC, r.id DESC",
            SELECT_REVIEWS
        );
        let rows = sqlx::query_as::<_, ReviewRow>(&query)
            .bind(reviewer_id)
            .fetch_all(self.pool)
            .await?;

        rows.into_iter().map(Review::try_from).collect()
    }

    /// List reviews from all users, newest first
    pub async fn list_recent(&self, limit: Option<u32>) -> Result<Vec<Review>> {
        let query = format!("{} ORDER BY r.created_at DESC, r.id DESC LIMIT ?", SELECT_REVIEWS);
        // SQLite treats a negative limit as unbounded
        let limit = limit.map(i64::from).unwrap_or(-1);
        let rows = sqlx::query_as::<_, ReviewRow>(&query)
            .bind(limit)
            .fetch_all(self.pool)
            .await?;

        rows.into_iter().map(Review::try_from).collect()
    }

    /// Count all stored reviews
    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reviews")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
