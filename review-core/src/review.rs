//! The review entity and its field limits

use std::fmt;
use std::net::IpAddr;

use chrono::{DateTime, Utc};

use crate::Identity;

/// Maximum length of `company_name`, in characters
pub const COMPANY_NAME_MAX_LEN: usize = 255;

/// Maximum length of `title`, in characters
pub const TITLE_MAX_LEN: usize = 64;

/// Maximum length of `summary`, in characters
pub const SUMMARY_MAX_LEN: usize = 10_000;

/// Lowest accepted rating
pub const RATING_MIN: i64 = 1;

/// Highest accepted rating
pub const RATING_MAX: i64 = 5;

/// A persisted company review
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,

    /// The user who submitted the review. Never reassigned.
    pub reviewer: Identity,

    pub company_name: String,

    /// Always within `RATING_MIN..=RATING_MAX`
    pub rating: i16,

    pub title: String,

    pub summary: String,

    /// Address the review was submitted from, when it could be determined
    pub ip_address: Option<IpAddr>,

    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Whether `caller` is the user who submitted this review
    pub fn is_reviewed_by(&self, caller: &Identity) -> bool {
        self.reviewer.user_id == caller.user_id
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {} - {}",
            self.rating, self.title, self.company_name, self.reviewer.username
        )
    }
}

/// A validated review ready to be inserted
///
/// Only constructed from a [`ReviewDraft`](crate::ReviewDraft), which is the
/// sole place caller input is checked. The reviewer and address come from the
/// request context, never from the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub reviewer_id: i64,
    pub company_name: String,
    pub rating: i16,
    pub title: String,
    pub summary: String,
    pub ip_address: Option<IpAddr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Review {
        Review {
            id: 7,
            reviewer: Identity::new(3, "test"),
            company_name: "szia".to_string(),
            rating: 5,
            title: "test".to_string(),
            summary: "ok".to_string(),
            ip_address: Some("127.0.0.1".parse().unwrap()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_display_format() {
        assert_eq!(sample().to_string(), "5 - test - szia - test");
    }

    #[test]
    fn test_is_reviewed_by() {
        let review = sample();
        assert!(review.is_reviewed_by(&Identity::new(3, "test")));
        // Ownership is decided by id, not by display name
        assert!(!review.is_reviewed_by(&Identity::new(4, "test")));
    }
}
