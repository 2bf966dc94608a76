pub mod api;
pub mod app_state;
pub mod demo_seed;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::bearer_token::BearerToken,
    users::{
        change_password_request::ChangePasswordRequest,
        create_user_request::CreateUserRequest, edit_user_request::EditUserRequest,
        login_request::LoginRequest, login_response::LoginResponse, user_dto::UserDto,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
