use lodge_core::Role;
use lodge_db::DbError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Signing key generation failed: {message} {location}")]
    KeyGeneration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Role {actual} may not access a {required} resource {location}")]
    ForbiddenRole {
        required: Role,
        actual: Role,
        location: ErrorLocation,
    },

    #[error("cannot edit or delete another user {location}")]
    Forbidden {
        user_id: i64,
        target_user_id: i64,
        location: ErrorLocation,
    },

    #[error("User {user_id} not found {location}")]
    UserNotFound {
        user_id: i64,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Store(#[from] DbError),
}

impl AuthError {
    /// Missing, malformed, expired or wrongly signed credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::InvalidToken { .. }
                | Self::TokenExpired { .. }
                | Self::MissingHeader { .. }
                | Self::InvalidScheme { .. }
                | Self::JwtDecode { .. }
                | Self::InvalidClaim { .. }
        )
    }

    /// Message safe to show to the caller, without source location
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidToken { .. } | Self::JwtDecode { .. } | Self::InvalidClaim { .. } => {
                "invalid token".to_string()
            }
            Self::TokenExpired { .. } => "token expired".to_string(),
            Self::MissingHeader { .. } => "missing authorization header".to_string(),
            Self::InvalidScheme { .. } => "authorization scheme must be Bearer".to_string(),
            Self::ForbiddenRole { required, .. } => {
                format!("only {} accounts may access this resource", required.as_str())
            }
            Self::Forbidden { .. } => "cannot edit or delete another user".to_string(),
            Self::UserNotFound { .. } => "user not found".to_string(),
            Self::JwtEncode { .. } | Self::KeyGeneration { .. } | Self::Store(_) => {
                "internal error".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
