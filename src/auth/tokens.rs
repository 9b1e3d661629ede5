/**
 * Session Tokens
 *
 * This module mints and verifies the bearer tokens that represent a
 * session: HS256-signed JWTs binding an account identifier to an expiry.
 *
 * # Key Handling
 *
 * The signing key is process-wide configuration. It is loaded once at
 * startup into a `TokenKeys` value that lives in the application state and
 * is passed explicitly to issue/verify - never read from the environment
 * per call and never embedded in code.
 *
 * # Token Lifecycle
 *
 * A token is minted at signup or login and is stateless afterward: it dies
 * by expiry or signature mismatch only. There is no revocation list.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AuthError;

/// JWT claims structure
///
/// Carries only what the session needs: the subject account id and the
/// issue/expiry timestamps. No profile data rides in the token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: account ID (UUID) as a string
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signing and verification keys plus the token lifetime
///
/// Built once at startup from `ServerConfig` and shared through
/// `AppState`. Both keys derive from the same HS256 secret.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenKeys {
    /// Build token keys from the configured secret and lifetime
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
            ttl_secs,
        }
    }

    /// Issue a signed token for an account
    ///
    /// # Arguments
    /// * `account_id` - The account the session binds to
    ///
    /// # Returns
    /// JWT string, valid from now until now + configured TTL
    pub fn issue(&self, account_id: Uuid) -> Result<String, AuthError> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: account_id.to_string(),
            iat,
            exp: iat + self.ttl_secs,
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify a presented token and recover the account identifier
    ///
    /// # Arguments
    /// * `token` - The bearer token string, without the `Bearer ` prefix
    ///
    /// # Returns
    /// The embedded account ID. Does not touch the account store; whether
    /// the subject still exists is the caller's concern.
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidToken` - malformed token, signature mismatch,
    ///   expired token, or a subject that is not a UUID
    pub fn verify(&self, token: &str) -> Result<Uuid, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| AuthError::InvalidToken)?;
        Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::InvalidToken)
    }
}
