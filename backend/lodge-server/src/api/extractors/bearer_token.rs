//! Axum extractors for REST API authentication

use crate::ApiError;

use lodge_auth::AuthError;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;

const BEARER_PREFIX: &str = "Bearer ";

/// The raw token from an `Authorization: Bearer <token>` header.
///
/// Only the header shape is checked here; signature and expiry are checked
/// by the authorization guard.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[track_caller]
    pub fn from_header_value(value: Option<&str>) -> Result<Self, AuthError> {
        let value = value.ok_or_else(|| AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })?;

        match value.strip_prefix(BEARER_PREFIX) {
            Some(token) if !token.trim().is_empty() => Ok(Self(token.trim().to_string())),
            Some(_) => Err(AuthError::InvalidToken {
                message: "empty bearer token".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Err(AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            BearerToken::from_header_value(header).map_err(ApiError::from)
        }
    }
}
