//! Token authentication
//!
//! Callers authenticate with `Authorization: Token <key>`. The extractor
//! runs before any handler logic, so an unauthenticated request never
//! reaches validation or storage.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use review_core::Identity;
use review_db::TokenRepository;
use tracing::debug;

use crate::{error::ApiError, state::SharedState};

const KEYWORD: &str = "token";

/// The authenticated caller of a request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Identity);

impl FromRequestParts<SharedState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let key = parts
            .headers
            .get(AUTHORIZATION)
            .map(|value| parse_token_header(value.as_bytes()))
            .transpose()?
            .flatten()
            .ok_or(ApiError::NotAuthenticated)?;

        match TokenRepository::new(state.db.pool()).find_identity(&key).await? {
            Some(identity) => Ok(AuthenticatedUser(identity)),
            None => {
                debug!("Rejected request with unknown token");
                Err(ApiError::AuthenticationFailed("Invalid token."))
            }
        }
    }
}

/// Extract the key from an `Authorization` header value
///
/// Returns `Ok(None)` when the header uses another scheme, which counts as
/// no credentials at all.
fn parse_token_header(value: &[u8]) -> Result<Option<String>, ApiError> {
    let value = std::str::from_utf8(value).map_err(|_| {
        ApiError::AuthenticationFailed(
            "Invalid token header. Token string should not contain invalid characters.",
        )
    })?;

    let mut parts = value.split_whitespace();
    match parts.next() {
        Some(keyword) if keyword.eq_ignore_ascii_case(KEYWORD) => {}
        _ => return Ok(None),
    }

    let key = parts.next().ok_or(ApiError::AuthenticationFailed(
        "Invalid token header. No credentials provided.",
    ))?;

    if parts.next().is_some() {
        return Err(ApiError::AuthenticationFailed(
            "Invalid token header. Token string should not contain spaces.",
        ));
    }

    Ok(Some(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_header() {
        assert_eq!(parse_token_header(b"Token abc123").unwrap(), Some("abc123".to_string()));
        assert_eq!(parse_token_header(b"token abc123").unwrap(), Some("abc123".to_string()));
        assert_eq!(parse_token_header(b"Bearer abc123").unwrap(), None);
        assert_eq!(parse_token_header(b"").unwrap(), None);
    }

    #[test]
    fn test_malformed_token_headers() {
        assert!(matches!(
            parse_token_header(b"Token"),
            Err(ApiError::AuthenticationFailed(msg)) if msg.contains("No credentials")
        ));
        assert!(matches!(
            parse_token_header(b"Token a b"),
            Err(ApiError::AuthenticationFailed(msg)) if msg.contains("spaces")
        ));
        assert!(matches!(
            parse_token_header(&[0x54, 0xff, 0xfe]),
            Err(ApiError::AuthenticationFailed(_))
        ));
    }
}
