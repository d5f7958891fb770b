//! Review endpoints
//!
//! - `/api/v1/reviews/`: list the caller's reviews, or create one
//! - `/api/v1/reviews/{id}/`: retrieve one of the caller's reviews
//!
//! Reviews are never updated or deleted through the API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{Method, StatusCode},
    Json,
};
use review_core::{IsReviewer, ObjectPermission, ReviewDraft, ReviewRepresentation};
use review_db::ReviewRepository;
use serde_json::Value;
use tracing::{debug, info};

use crate::{auth::AuthenticatedUser, error::ApiError, origin::ClientIp, state::SharedState};

const COLLECTION_ALLOW: &str = "GET, POST, HEAD";
const ITEM_ALLOW: &str = "GET, HEAD";

/// List all reviews submitted by the caller, newest first
pub async fn list_reviews(
    State(state): State<SharedState>,
    AuthenticatedUser(caller): AuthenticatedUser,
) -> Result<Json<Vec<ReviewRepresentation>>, ApiError> {
    let reviews = ReviewRepository::new(state.db.pool())
        .list_by_reviewer(caller.user_id)
        .await?;

    Ok(Json(reviews.into_iter().map(ReviewRepresentation::from).collect()))
}

/// Create a new review owned by the caller
pub async fn create_review(
    State(state): State<SharedState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    ClientIp(ip_address): ClientIp,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ReviewRepresentation>), ApiError> {
    let Json(payload) = body.map_err(|rejection| match rejection {
        JsonRejection::MissingJsonContentType(_) => ApiError::UnsupportedMediaType,
        other => ApiError::MalformedJson(other.body_text()),
    })?;

    let draft = ReviewDraft::from_payload(&payload).inspect_err(|errors| {
        debug!(user = %caller.username, %errors, "Rejected review payload");
    })?;

    let review = ReviewRepository::new(state.db.pool())
        .create(&draft.into_new_review(&caller, ip_address))
        .await?;

    info!(review_id = review.id, user = %caller.username, "Review created");

    Ok((StatusCode::CREATED, Json(review.into())))
}

/// Retrieve a single review
///
/// An id that matches nothing is 404; a review that exists but belongs to
/// someone else is 403.
pub async fn retrieve_review(
    State(state): State<SharedState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<Json<ReviewRepresentation>, ApiError> {
    let id = parse_review_id(&id).ok_or(ApiError::NotFound)?;

    let review = ReviewRepository::new(state.db.pool())
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    IsReviewer.authorize(&caller, &review).inspect_err(|_| {
        debug!(review_id = id, user = %caller.username, "Denied access to review");
    })?;

    Ok(Json(review.into()))
}

/// Path ids are plain decimal digits; signs and whitespace match no review
fn parse_review_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Reject any other method on the collection, after authenticating
pub async fn collection_method_not_allowed(
    _caller: AuthenticatedUser,
    method: Method,
) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        allow: COLLECTION_ALLOW,
    }
}

/// Reject update, delete, and any other method on a single review
pub async fn item_method_not_allowed(_caller: AuthenticatedUser, method: Method) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        allow: ITEM_ALLOW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_review_id() {
        assert_eq!(parse_review_id("42"), Some(42));
        assert_eq!(parse_review_id("007"), Some(7));
        assert_eq!(parse_review_id("+42"), None);
        assert_eq!(parse_review_id("-42"), None);
        assert_eq!(parse_review_id(" 42"), None);
        assert_eq!(parse_review_id(""), None);
        assert_eq!(parse_review_id("abc"), None);
        assert_eq!(parse_review_id("99999999999999999999"), None);
    }
}
