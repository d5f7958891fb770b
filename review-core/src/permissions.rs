//! Object-level access policy
//!
//! Listing is scoped by the storage query itself; these checks guard direct
//! access to a single review, where no such scoping applies.

use thiserror::Error;

use crate::{Identity, Review};

/// Message returned when a policy denies access
pub const PERMISSION_DENIED: &str = "You do not have permission to perform this action.";

/// Raised when a caller is not allowed to access a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AccessDenied {
    pub review_id: i64,
    pub message: &'static str,
}

/// A per-record permission check
pub trait ObjectPermission {
    /// Whether `caller` may access `review`
    fn has_object_permission(&self, caller: &Identity, review: &Review) -> bool;

    /// Check the permission, producing an error on denial
    fn authorize(&self, caller: &Identity, review: &Review) -> Result<(), AccessDenied> {
        if self.has_object_permission(caller, review) {
            Ok(())
        } else {
            Err(AccessDenied {
                review_id: review.id,
                message: PERMISSION_DENIED,
            })
        }
    }
}

/// Only the user who submitted a review may access it
#[derive(Debug, Clone, Copy, Default)]
pub struct IsReviewer;

impl ObjectPermission for IsReviewer {
    fn has_object_permission(&self, caller: &Identity, review: &Review) -> bool {
        review.is_reviewed_by(caller)
    }
}
