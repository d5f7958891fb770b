//! Database layer for the company review service
//!
//! Persists users, their API tokens, and reviews in SQLite.

pub mod connection;
pub mod error;
pub mod models;
pub mod repos;

pub use connection::{Database, DatabaseConfig};
pub use error::{DbError, Result};
pub use models::{ApiToken, User};
pub use repos::{ReviewRepository, TokenRepository, UserRepository};
