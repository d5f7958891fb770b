//! Database row types

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use review_core::{Identity, Review};
use serde::Serialize;

use crate::error::{DbError, Result};

/// Registered user account
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The identity this account authenticates as
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.username.clone())
    }
}

/// API token issued to a user
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct ApiToken {
    pub key: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// A review row joined with its reviewer's username
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReviewRow {
    pub id: i64,
    pub reviewer_id: i64,
    pub reviewer_username: String,
    pub company_name: String,
    pub rating: i64,
    pub title: String,
    pub summary: String,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ReviewRow> for Review {
    type Error = DbError;

    fn try_from(row: ReviewRow) -> Result<Self> {
        let rating = i16::try_from(row.rating).map_err(|_| {
            DbError::InvalidData(format!("Review {} has rating {}", row.id, row.rating))
        })?;

        let ip_address = row
            .ip_address
            .map(|ip| {
                ip.parse::<IpAddr>().map_err(|_| {
                    DbError::InvalidData(format!("Review {} has malformed address '{}'", row.id, ip))
                })
            })
            .transpose()?;

        Ok(Review {
            id: row.id,
            reviewer: Identity::new(row.reviewer_id, row.reviewer_username),
            company_name: row.company_name,
            rating,
            title: row.title,
            summary: row.summary,
            ip_address,
            created_at: row.created_at,
        })
    }
}
