// Authentication: credential hashing, session tokens, bearer auth
pub mod password;
pub mod tokens;

pub use password::{hash_password, verify_password};
pub use tokens::{generate_token, session_expiry};

use actix_web::http::header;
use actix_web::HttpRequest;

use crate::error::ApiError;
use crate::models::User;
use crate::services::PostgresClient;

/// Extract the bearer token from the Authorization header
///
/// The header value is accepted with or without the "Bearer " prefix,
/// mirroring how clients commonly send it.
pub fn bearer_token(req: &HttpRequest) -> Result<&str, ApiError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

    Ok(value.strip_prefix("Bearer ").unwrap_or(value))
}

/// Resolve the authenticated user for a request
///
/// A session is valid only while its expiry lies in the future; there is
/// no other revocation mechanism.
pub async fn authenticate(
    postgres: &PostgresClient,
    req: &HttpRequest,
) -> Result<User, ApiError> {
    let token = bearer_token(req)?;

    let session = postgres
        .find_session(token)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

    let user = postgres
        .find_user_by_id(session.user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_bearer_token_with_prefix() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer abc123"))
            .to_http_request();

        assert_eq!(bearer_token(&req).unwrap(), "abc123");
    }

    #[test]
    fn test_bearer_token_without_prefix() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "abc123"))
            .to_http_request();

        assert_eq!(bearer_token(&req).unwrap(), "abc123");
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let err = bearer_token(&req).unwrap_err();

        assert!(matches!(err, ApiError::Unauthorized(_)));
    }
}
