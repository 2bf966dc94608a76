//! User REST API handlers
//!
//! Login and registration are open; everything else needs a bearer token.
//! Edits, password changes and deletion are restricted to the account owner.

use crate::{
    ApiError, ApiResult, AppState, BearerToken, ChangePasswordRequest, CreateUserRequest,
    EditUserRequest, LoginRequest, LoginResponse, UserDto,
};

use lodge_core::Role;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/users/login
///
/// Exchange email and password for a signed token
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(req) = payload?;

    let user = state
        .users()
        .check_credentials(&req.email, &req.password)
        .await?
        .ok_or_else(|| ApiError::unauthorized("bad credentials"))?;

    let token = state.tokens.issue(&user)?;

    info!("User {} logged in", user.id);

    Ok(Json(LoginResponse { token }))
}

/// POST /api/users/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let Json(req) = payload?;
    let new_user = req.into_new_user()?;

    let user = state.users().create(&new_user).await?;

    info!("Registered {} account {}", user.role, user.id);

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// POST /api/users/authorize/guest
///
/// Used by other services to resolve a guest token into an account
pub async fn authorize_guest(
    State(state): State<AppState>,
    token: BearerToken,
) -> ApiResult<Json<UserDto>> {
    let user = state
        .guard
        .authenticate(token.as_str(), Role::Guest, true)
        .await?;

    Ok(Json(user.into()))
}

/// POST /api/users/authorize/host
pub async fn authorize_host(
    State(state): State<AppState>,
    token: BearerToken,
) -> ApiResult<Json<UserDto>> {
    let user = state
        .guard
        .authenticate(token.as_str(), Role::Host, true)
        .await?;

    Ok(Json(user.into()))
}

/// GET /api/users/{id}
///
/// Any authenticated account may read any profile
pub async fn get_user(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<String>,
) -> ApiResult<Json<UserDto>> {
    let user_id = parse_user_id(&id)?;

    state
        .guard
        .authenticate(token.as_str(), Role::Guest, false)
        .await?;

    let user = state
        .users()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("user {} not found", user_id)))?;

    Ok(Json(user.into()))
}

/// PUT /api/users/{id}
///
/// Edit the caller's own profile. The role never changes.
pub async fn edit_user(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<String>,
    payload: Result<Json<EditUserRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let user_id = parse_user_id(&id)?;
    let Json(req) = payload?;

    let mut user = state
        .guard
        .authorize_self_or_reject(token.as_str(), user_id)
        .await?;

    let update = req.into_profile_update(user.notifications);
    user.apply_profile_update(update)?;

    if !state.users().save(&user).await? {
        return Err(ApiError::not_found(format!("user {} not found", user_id)));
    }

    info!("User {} updated their profile", user_id);

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/users/change-password/{id}
pub async fn change_password(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<String>,
    payload: Result<Json<ChangePasswordRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let user_id = parse_user_id(&id)?;
    let Json(req) = payload?;

    let mut user = state
        .guard
        .authorize_self_or_reject(token.as_str(), user_id)
        .await?;

    user.change_password(&req.old_password, &req.new_password)?;

    if !state.users().save(&user).await? {
        return Err(ApiError::not_found(format!("user {} not found", user_id)));
    }

    info!("User {} changed their password", user_id);

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/users/{id}
///
/// Runs the deletion saga. A host whose accommodations could not be purged
/// is still deleted; the cleanup is left to the sweeper.
pub async fn delete_user(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let user_id = parse_user_id(&id)?;

    state
        .guard
        .authorize_self_or_reject(token.as_str(), user_id)
        .await?;

    let report = state.saga.delete_user(user_id, Some(token.as_str())).await?;

    if report.compensation_pending() {
        info!(
            "User {} deleted; accommodation cleanup queued as retry record {:?}",
            user_id, report.retry_record_id
        );
    } else {
        info!("User {} deleted", user_id);
    }

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn parse_user_id(raw: &str) -> ApiResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::Validation {
            message: format!("invalid user id: {}", raw),
            field: Some("id".to_string()),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
