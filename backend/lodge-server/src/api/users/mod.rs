pub mod change_password_request;
pub mod create_user_request;
pub mod edit_user_request;
pub mod login_request;
pub mod login_response;
pub mod user_dto;
pub mod users;
