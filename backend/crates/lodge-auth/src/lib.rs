pub mod authorization_guard;
pub mod claims;
pub mod error;
pub mod token_service;
pub mod token_signer;

pub use authorization_guard::AuthorizationGuard;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use token_service::{DEFAULT_TOKEN_TTL_HOURS, TokenService};
pub use token_signer::TokenSigner;

#[cfg(test)]
mod tests;
