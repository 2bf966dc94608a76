use crate::{AuthError, Result as AuthErrorResult, TokenService};

use lodge_core::{Role, User};
use lodge_db::UserRepository;

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;

/// Turns a bearer token into the current account record.
///
/// The token only proves identity at issuance; every call re-reads the user
/// so a token that outlives its account is rejected.
#[derive(Clone)]
pub struct AuthorizationGuard {
    tokens: TokenService,
    users: UserRepository,
}

impl AuthorizationGuard {
    pub fn new(tokens: TokenService, users: UserRepository) -> Self {
        Self { tokens, users }
    }

    pub async fn authenticate(
        &self,
        token: &str,
        required_role: Role,
        enforce_role: bool,
    ) -> AuthErrorResult<User> {
        let location = ErrorLocation::from(Location::caller());
        let claims = self.tokens.verify(token)?;

        if enforce_role && claims.role != required_role {
            debug!(
                "Rejected user {}: role {} where {} is required",
                claims.id, claims.role, required_role
            );
            return Err(AuthError::ForbiddenRole {
                required: required_role,
                actual: claims.role,
                location,
            });
        }

        match self.users.find_by_id(claims.id).await? {
            Some(user) => Ok(user),
            None => {
                debug!("Token for user {} outlived the account", claims.id);
                Err(AuthError::UserNotFound {
                    user_id: claims.id,
                    location,
                })
            }
        }
    }

    /// Authenticate and require the caller to be `target_user_id`
    pub async fn authorize_self_or_reject(
        &self,
        token: &str,
        target_user_id: i64,
    ) -> AuthErrorResult<User> {
        let location = ErrorLocation::from(Location::caller());
        // Role is not checked here; any role may act on its own account.
        let user = self.authenticate(token, Role::Guest, false).await?;

        if user.id != target_user_id {
            debug!("User {} tried to act on user {}", user.id, target_user_id);
            return Err(AuthError::Forbidden {
                user_id: user.id,
                target_user_id,
                location,
            });
        }

        Ok(user)
    }
}
