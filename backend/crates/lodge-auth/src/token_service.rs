use crate::{AuthError, Claims, Result as AuthErrorResult, TokenSigner};

use lodge_core::User;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};

pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Issues and verifies HS256 session tokens
#[derive(Clone)]
pub struct TokenService {
    signer: TokenSigner,
    ttl: chrono::Duration,
    validation: Validation,
}

impl TokenService {
    pub fn new(signer: TokenSigner, ttl: chrono::Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            signer,
            ttl,
            validation,
        }
    }

    pub fn with_default_ttl(signer: TokenSigner) -> Self {
        Self::new(signer, chrono::Duration::hours(DEFAULT_TOKEN_TTL_HOURS))
    }

    pub fn ttl(&self) -> chrono::Duration {
        self.ttl
    }

    #[track_caller]
    pub fn issue(&self, user: &User) -> AuthErrorResult<String> {
        self.issue_at(user, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`
    #[track_caller]
    pub fn issue_at(&self, user: &User, issued_at: DateTime<Utc>) -> AuthErrorResult<String> {
        let claims = Claims::for_user(user, issued_at, self.ttl);

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            self.signer.encoding_key(),
        )
        .map_err(|e| AuthError::JwtEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Check signature and expiry and return the claims.
    ///
    /// `exp` must be strictly in the future; there is no clock-skew leeway.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, self.signer.decoding_key(), &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => AuthError::JwtDecode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                },
            })?;

        // The library accepts exp == now; a token at its expiry instant is dead
        if token_data.claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}
