//! HTTP error mapping
//!
//! Validation failures render as a field → messages map; everything else
//! renders as `{"detail": "..."}`.

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use review_core::{AccessDenied, ValidationErrors};
use review_db::DbError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("Authentication credentials were not provided.")]
    NotAuthenticated,

    #[error("{0}")]
    AuthenticationFailed(&'static str),

    #[error(transparent)]
    Forbidden(#[from] AccessDenied),

    #[error("Not found.")]
    NotFound,

    #[error("Method \"{method}\" not allowed.")]
    MethodNotAllowed {
        method: Method,
        allow: &'static str,
    },

    #[error("Unsupported media type in request.")]
    UnsupportedMediaType,

    #[error("JSON parse error - {0}")]
    MalformedJson(String),

    #[error("Internal error: {0}")]
    Database(#[from] DbError),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedJson(_) => StatusCode::BAD_REQUEST,
            ApiError::NotAuthenticated | ApiError::AuthenticationFailed(_) => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let mut response = match &self {
            ApiError::Validation(errors) => (status, Json(errors)).into_response(),
            ApiError::Database(e) => {
                error!(error = %e, "Request failed on storage error");
                (status, Json(json!({ "detail": "A server error occurred." }))).into_response()
            }
            _ => (status, Json(json!({ "detail": self.to_string() }))).into_response(),
        };

        match &self {
            ApiError::NotAuthenticated | ApiError::AuthenticationFailed(_) => {
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Token"));
            }
            ApiError::MethodNotAllowed { allow, .. } => {
                response
                    .headers_mut()
                    .insert(header::ALLOW, HeaderValue::from_static(*allow));
            }
            _ => {}
        }

        response
    }
}
