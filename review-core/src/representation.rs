//! Wire representation of reviews
//!
//! [`ReviewDraft`] is the single validation gate for caller input: it reads
//! only the writable fields and refuses payloads that try to supply
//! server-assigned ones. [`ReviewRepresentation`] is the only shape a review
//! is ever rendered in, and it has no room for the submitter's address.

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::review::{
    COMPANY_NAME_MAX_LEN, RATING_MAX, RATING_MIN, SUMMARY_MAX_LEN, TITLE_MAX_LEN,
};
use crate::validation::{self, messages, ValidationErrors, NON_FIELD_ERRORS};
use crate::{Identity, NewReview, Review};

/// Fields the server fills in; a payload carrying any of them is rejected
pub const SERVER_ASSIGNED_FIELDS: [&str; 4] = ["id", "reviewer", "ip_address", "created_at"];

/// Caller-supplied review content that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub rating: i16,
    pub title: String,
    pub summary: String,
    pub company_name: String,
}

impl ReviewDraft {
    /// Validate a create payload
    ///
    /// Every invalid field is reported, not only the first. Keys other than
    /// the writable and server-assigned fields are ignored.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let fields = match payload {
            Value::Object(fields) => fields,
            other => {
                errors.add(NON_FIELD_ERRORS, messages::expected_object(validation::json_kind(other)));
                return Err(errors);
            }
        };

        for field in SERVER_ASSIGNED_FIELDS {
            if fields.contains_key(field) {
                errors.add(field, messages::SERVER_ASSIGNED);
            }
        }

        let rating = errors.collect(
            "rating",
            validation::required_integer(fields.get("rating"), RATING_MIN, RATING_MAX),
        );
        let title = errors.collect(
            "title",
            validation::required_text(fields.get("title"), TITLE_MAX_LEN),
        );
        let summary = errors.collect(
            "summary",
            validation::required_text(fields.get("summary"), SUMMARY_MAX_LEN),
        );
        let company_name = errors.collect(
            "company_name",
            validation::required_text(fields.get("company_name"), COMPANY_NAME_MAX_LEN),
        );

        match (rating, title, summary, company_name) {
            (Some(rating), Some(title), Some(summary), Some(company_name)) if errors.is_empty() => {
                Ok(Self {
                    // in range after validation, so the narrowing cannot truncate
                    rating: rating as i16,
                    title,
                    summary,
                    company_name,
                })
            }
            _ => Err(errors),
        }
    }

    /// Attach the request context, producing a record ready for storage
    pub fn into_new_review(self, reviewer: &Identity, ip_address: Option<IpAddr>) -> NewReview {
        NewReview {
            reviewer_id: reviewer.user_id,
            company_name: self.company_name,
            rating: self.rating,
            title: self.title,
            summary: self.summary,
            ip_address,
        }
    }
}

/// A review as returned to API clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRepresentation {
    pub id: i64,
    pub rating: i16,
    pub title: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
    pub company_name: String,
    /// Username of the submitter
    pub reviewer: String,
}

impl From<&Review> for ReviewRepresentation {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id,
            rating: review.rating,
            title: review.title.clone(),
            summary: review.summary.clone(),
            created_at: review.created_at,
            company_name: review.company_name.clone(),
            reviewer: review.reviewer.username.clone(),
        }
    }
}

impl From<Review> for ReviewRepresentation {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            rating: review.rating,
            title: review.title,
            summary: review.summary,
            created_at: review.created_at,
            company_name: review.company_name,
            reviewer: review.reviewer.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> Value {
        json!({"rating": 5, "title": "test", "summary": "ok", "company_name": "szia"})
    }

    fn with(field: &str, value: Value) -> Value {
        let mut payload = payload();
        payload[field] = value;
        payload
    }

    fn without(field: &str) -> Value {
        let mut payload = payload();
        payload.as_object_mut().unwrap().remove(field);
        payload
    }

    fn errors_for(payload: &Value, field: &str) -> Vec<String> {
        let errors = ReviewDraft::from_payload(payload).unwrap_err();
        errors.get(field).map(|m| m.to_vec()).unwrap_or_default()
    }

    #[test]
    fn test_valid_payload() {
        let draft = ReviewDraft::from_payload(&payload()).unwrap();
        assert_eq!(
            draft,
            ReviewDraft {
                rating: 5,
                title: "test".to_string(),
                summary: "ok".to_string(),
                company_name: "szia".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_fields_are_reported_per_field() {
        for field in ["rating", "title", "summary", "company_name"] {
            let errors = ReviewDraft::from_payload(&without(field)).unwrap_err();
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field]);
            assert_eq!(errors.get(field).unwrap(), ["This field is required."]);
        }
    }

    #[test]
    fn test_all_invalid_fields_reported_together() {
        let errors = ReviewDraft::from_payload(&json!({"rating": 9, "title": ""})).unwrap_err();
        let mut fields: Vec<_> = errors.fields().collect();
        fields.sort();
        assert_eq!(fields, vec!["company_name", "rating", "summary", "title"]);
    }

    #[test]
    fn test_rating_bounds() {
        assert!(ReviewDraft::from_payload(&with("rating", json!(1))).is_ok());
        assert!(ReviewDraft::from_payload(&with("rating", json!(5))).is_ok());
        assert_eq!(
            errors_for(&with("rating", json!(0)), "rating"),
            vec!["Ensure this value is greater than or equal to 1."]
        );
        assert_eq!(
            errors_for(&with("rating", json!(-1)), "rating"),
            vec!["Ensure this value is greater than or equal to 1."]
        );
        assert_eq!(
            errors_for(&with("rating", json!(6)), "rating"),
            vec!["Ensure this value is less than or equal to 5."]
        );
        assert_eq!(
            errors_for(&with("rating", json!("very gut")), "rating"),
            vec!["A valid integer is required."]
        );
    }

    #[test]
    fn test_text_length_bounds() {
        assert!(ReviewDraft::from_payload(&with("title", json!("a".repeat(64)))).is_ok());
        assert_eq!(
            errors_for(&with("title", json!("a".repeat(65))), "title"),
            vec!["Ensure this field has no more than 64 characters."]
        );
        assert!(ReviewDraft::from_payload(&with("summary", json!("a".repeat(10_000)))).is_ok());
        assert_eq!(
            errors_for(&with("summary", json!("a".repeat(10_001))), "summary"),
            vec!["Ensure this field has no more than 10000 characters."]
        );
        assert!(ReviewDraft::from_payload(&with("company_name", json!("a".repeat(255)))).is_ok());
        assert_eq!(
            errors_for(&with("company_name", json!("a".repeat(256))), "company_name"),
            vec!["Ensure this field has no more than 255 characters."]
        );
    }

    #[test]
    fn test_blank_text() {
        for field in ["title", "summary", "company_name"] {
            assert_eq!(
                errors_for(&with(field, json!("")), field),
                vec!["This field may not be blank."]
            );
        }
    }

    #[test]
    fn test_server_assigned_fields_rejected() {
        for field in SERVER_ASSIGNED_FIELDS {
            let errors = ReviewDraft::from_payload(&with(field, json!(1))).unwrap_err();
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field]);
            assert_eq!(errors.get(field).unwrap(), [messages::SERVER_ASSIGNED]);
        }
    }

    #[test]
    fn test_unknown_fields_ignored() {
        assert!(ReviewDraft::from_payload(&with("mood", json!("cheerful"))).is_ok());
    }

    #[test]
    fn test_non_object_payload() {
        let errors = ReviewDraft::from_payload(&json!([1, 2])).unwrap_err();
        assert_eq!(
            errors.get(NON_FIELD_ERRORS).unwrap(),
            ["Invalid data. Expected a dictionary, but got list."]
        );
    }

    #[test]
    fn test_into_new_review_takes_context() {
        let draft = ReviewDraft::from_payload(&payload()).unwrap();
        let ip: IpAddr = "10.0.0.1".parse().unwrap();
        let new = draft.into_new_review(&Identity::new(12, "alice"), Some(ip));
        assert_eq!(new.reviewer_id, 12);
        assert_eq!(new.ip_address, Some(ip));
        assert_eq!(new.title, "test");
    }

    #[test]
    fn test_representation_hides_ip_address() {
        let review = Review {
            id: 1,
            reviewer: Identity::new(2, "alice"),
            company_name: "szia".to_string(),
            rating: 4,
            title: "t".to_string(),
            summary: "s".to_string(),
            ip_address: Some("127.0.0.1".parse().unwrap()),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(ReviewRepresentation::from(&review)).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["company_name", "created_at", "id", "rating", "reviewer", "summary", "title"]
        );
        assert_eq!(value["reviewer"], "alice");
    }
}
