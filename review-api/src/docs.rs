//! Self-describing API documentation served at `/docs/`

use axum::Json;
use review_core::review::{COMPANY_NAME_MAX_LEN, RATING_MAX, RATING_MIN, SUMMARY_MAX_LEN, TITLE_MAX_LEN};
use serde_json::{json, Value};

use crate::{COLLECTION_PATH, ITEM_PATH};

pub async fn api_docs() -> Json<Value> {
    Json(document())
}

fn document() -> Value {
    json!({
        "title": "Review API",
        "version": env!("CARGO_PKG_VERSION"),
        "authentication": "Send `Authorization: Token <key>` on every /api request.",
        "endpoints": [
            {
                "path": COLLECTION_PATH,
                "method": "GET",
                "description": "List all reviews submitted by the user.",
                "auth": true,
                "response": "array of review",
            },
            {
                "path": COLLECTION_PATH,
                "method": "POST",
                "description": "Create a new review.",
                "auth": true,
                "request": {
                    "rating": format!("integer, {}..={}", RATING_MIN, RATING_MAX),
                    "title": format!("string, 1..={} characters", TITLE_MAX_LEN),
                    "summary": format!("string, 1..={} characters", SUMMARY_MAX_LEN),
                    "company_name": format!("string, 1..={} characters", COMPANY_NAME_MAX_LEN),
                },
                "response": "review (201)",
            },
            {
                "path": ITEM_PATH,
                "method": "GET",
                "description": "Retrieve a single review.",
                "auth": true,
                "response": "review",
            },
        ],
        "schemas": {
            "review": {
                "id": "integer",
                "rating": "integer",
                "title": "string",
                "summary": "string",
                "created_at": "RFC 3339 timestamp",
                "company_name": "string",
                "reviewer": "username of the submitter",
            },
        },
    })
}
