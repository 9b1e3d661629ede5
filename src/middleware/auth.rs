/**
 * Authentication Middleware
 *
 * This module provides the extractor that protects routes requiring an
 * authenticated caller. It pulls the bearer token from the Authorization
 * header, verifies it against the process-wide token keys, and hands the
 * handler the token's subject.
 *
 * Verification does not touch the account store; whether the subject still
 * exists is checked by the handler that needs the account.
 */

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use uuid::Uuid;

use crate::error::AuthError;
use crate::server::state::AppState;

/// Subject of a verified bearer token
///
/// Use as a handler parameter to require authentication:
///
/// ```rust,ignore
/// async fn handler(AuthUser(account_id): AuthUser) { /* ... */ }
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser(pub Uuid);

/// Pull the token out of an `Authorization: Bearer <token>` header value
fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ")
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("missing Authorization header");
                AuthError::InvalidToken
            })?;

        let token = bearer_token(header).ok_or_else(|| {
            tracing::warn!("Authorization header is not a bearer token");
            AuthError::InvalidToken
        })?;

        let account_id = state.token_keys.verify(token)?;

        Ok(AuthUser(account_id))
    }
}
