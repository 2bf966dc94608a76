use crate::{AuthError, Result as AuthErrorResult};

use std::fmt;
use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use error_location::ErrorLocation;
use jsonwebtoken::{DecodingKey, EncodingKey};
use rand::TryRngCore;
use rand::rngs::OsRng;

/// Random key length in bytes before encoding
pub const GENERATED_KEY_BYTES: usize = 32;

/// Process-wide HS256 key.
///
/// Built once at startup and handed to the [`crate::TokenService`]. Tokens
/// signed by one process are rejected by any process holding a different key.
#[derive(Clone)]
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenSigner {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Generate a fresh key from 32 OS-random bytes, base64url encoded.
    ///
    /// Failure here is fatal for the process.
    #[track_caller]
    pub fn generate() -> AuthErrorResult<Self> {
        let mut bytes = [0u8; GENERATED_KEY_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| AuthError::KeyGeneration {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let secret = URL_SAFE_NO_PAD.encode(bytes);
        Ok(Self::from_secret(secret.as_bytes()))
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner").finish_non_exhaustive()
    }
}
