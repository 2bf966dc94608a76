use crate::ApiError;

use lodge_auth::AuthError;
use lodge_core::Role;
use lodge_remote::RemoteError;
use lodge_saga::DeletionError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_message_and_status_code() {
    let (status, json) = body_json(ApiError::not_found("user 4 not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "user 4 not found");
    assert_eq!(json["statusCode"], 404);
}

#[tokio::test]
async fn test_validation_error_returns_400() {
    let error = ApiError::Validation {
        message: "invalid email".into(),
        field: Some("email".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["statusCode"], 400);
}

#[tokio::test]
async fn test_conflict_error_returns_409() {
    let error = ApiError::Conflict {
        message: "email or username already taken".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "email or username already taken");
}

#[tokio::test]
async fn test_gateway_timeout_returns_504() {
    let error = ApiError::GatewayTimeout {
        message: "reservation service unreachable".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(json["statusCode"], 504);
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, _) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_expired_token_converts_to_unauthorized() {
    let error = ApiError::from(AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_missing_header_converts_to_unauthorized() {
    let error = ApiError::from(AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_forbidden_role_converts_to_forbidden() {
    let error = ApiError::from(AuthError::ForbiddenRole {
        required: Role::Host,
        actual: Role::Guest,
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::FORBIDDEN);
    assert!(error.to_string().contains("only host accounts"));
}

#[test]
fn test_acting_on_another_user_converts_to_forbidden() {
    let error = ApiError::from(AuthError::Forbidden {
        user_id: 5,
        target_user_id: 7,
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::FORBIDDEN);
    assert!(
        error
            .to_string()
            .contains("cannot edit or delete another user")
    );
}

#[test]
fn test_unknown_token_subject_converts_to_not_found() {
    let error = ApiError::from(AuthError::UserNotFound {
        user_id: 9,
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_active_reservations_converts_to_bad_request() {
    let error = ApiError::from(DeletionError::HasActiveReservations {
        user_id: 3,
        party: "guest",
        count: 1,
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("guest has active reservations"));
}

#[test]
fn test_dependency_unavailable_converts_to_gateway_timeout() {
    let error = ApiError::from(DeletionError::DependencyUnavailable {
        source: RemoteError::NoEndpoints {
            service: "reservation",
            location: ErrorLocation::from(Location::caller()),
        },
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::GATEWAY_TIMEOUT);
    assert!(error.to_string().contains("reservation service unreachable"));
}

#[test]
fn test_missing_user_during_deletion_converts_to_bad_request() {
    let error = ApiError::from(DeletionError::UserNotFound {
        user_id: 99,
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
}
