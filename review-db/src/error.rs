//! Error types for database operations

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    /// SQLx database error
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Review not found
    #[error("Review {0} not found")]
    ReviewNotFound(i64),

    /// User not found
    #[error("User '{0}' not found")]
    UserNotFound(String),

    /// Username already registered
    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    /// Stored data that does not fit the domain model
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for database operations
pub type Result<T> = std::result::Result<T, DbError>;
