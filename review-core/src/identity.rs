//! Authenticated caller identity

use serde::{Deserialize, Serialize};

/// An authenticated user, as resolved from request credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Internal user id
    pub user_id: i64,

    /// Human-readable account name
    pub username: String,
}

impl Identity {
    pub fn new(user_id: i64, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }
}
