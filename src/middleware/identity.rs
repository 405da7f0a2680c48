use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::UserIdentity;

/// Header carrying the authenticated user's UUID
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the authenticated user's email address
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// Extracts the acting user from gateway-injected identity headers.
///
/// Authentication happens in the fronting gateway; this API trusts the
/// `x-user-id` and `x-user-email` headers it forwards. Watchlist handlers
/// take `UserIdentity` as an extractor argument, so requests without a
/// valid identity are rejected with 401 before any handler runs. Emails
/// are normalized to lowercase to match how shares store them.
#[axum::async_trait]
impl<S> FromRequestParts<S> for UserIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok())
            .ok_or_else(|| {
                AppError::Unauthorized("Missing or invalid x-user-id header".to_string())
            })?;

        let email = parts
            .headers
            .get(USER_EMAIL_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().to_lowercase())
            .filter(|value| value.contains('@'))
            .ok_or_else(|| {
                AppError::Unauthorized("Missing or invalid x-user-email header".to_string())
            })?;

        Ok(UserIdentity { id, email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<UserIdentity, AppError> {
        let (mut parts, _) = request.into_parts();
        UserIdentity::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extracts_identity_from_headers() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "7f2c63a5-3f2e-4e4e-9c4b-2d6f95c7a111")
            .header(USER_EMAIL_HEADER, " Casey@Example.COM ")
            .body(())
            .unwrap();

        let identity = extract(request).await.unwrap();
        assert_eq!(
            identity.id,
            Uuid::parse_str("7f2c63a5-3f2e-4e4e-9c4b-2d6f95c7a111").unwrap()
        );
        assert_eq!(identity.email, "casey@example.com");
    }

    #[tokio::test]
    async fn test_missing_user_id_is_unauthorized() {
        let request = Request::builder()
            .header(USER_EMAIL_HEADER, "casey@example.com")
            .body(())
            .unwrap();

        let result = extract(request).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_malformed_user_id_is_unauthorized() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "not-a-uuid")
            .header(USER_EMAIL_HEADER, "casey@example.com")
            .body(())
            .unwrap();

        let result = extract(request).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_missing_email_is_unauthorized() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "7f2c63a5-3f2e-4e4e-9c4b-2d6f95c7a111")
            .body(())
            .unwrap();

        let result = extract(request).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_email_without_at_sign_is_unauthorized() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "7f2c63a5-3f2e-4e4e-9c4b-2d6f95c7a111")
            .header(USER_EMAIL_HEADER, "not-an-email")
            .body(())
            .unwrap();

        let result = extract(request).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
