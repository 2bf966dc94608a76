use crate::BearerToken;

use lodge_auth::AuthError;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use http::StatusCode;

async fn extract(header: Option<&str>) -> Result<BearerToken, crate::ApiError> {
    let mut builder = Request::builder().uri("/api/users/1");
    if let Some(value) = header {
        builder = builder.header("Authorization", value);
    }
    let (mut parts, _) = builder.body(Body::empty()).unwrap().into_parts();

    BearerToken::from_request_parts(&mut parts, &()).await
}

#[tokio::test]
async fn test_bearer_header_yields_token() {
    let token = extract(Some("Bearer abc.def.ghi")).await.unwrap();

    assert_eq!(token.as_str(), "abc.def.ghi");
}

#[tokio::test]
async fn test_missing_header_is_unauthorized() {
    let error = extract(None).await.unwrap_err();

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_basic_scheme_is_unauthorized() {
    let error = extract(Some("Basic dXNlcjpwYXNz")).await.unwrap_err();

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_empty_bearer_value_is_invalid_token() {
    let result = BearerToken::from_header_value(Some("Bearer   "));

    assert!(matches!(result, Err(AuthError::InvalidToken { .. })));
}

#[test]
fn test_lowercase_scheme_is_rejected() {
    let result = BearerToken::from_header_value(Some("bearer abc"));

    assert!(matches!(result, Err(AuthError::InvalidScheme { .. })));
}
