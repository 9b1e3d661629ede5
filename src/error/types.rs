/**
 * Authentication Error Types
 *
 * This module defines the error enum shared by the credential store, the
 * token issuer/verifier, and the HTTP handlers.
 *
 * # Error Categories
 *
 * ## Caller errors
 *
 * Produced by invalid requests and mapped to 4xx responses:
 * - Missing or empty request fields
 * - Duplicate signup email
 * - Failed login credentials
 * - Missing, malformed, tampered, or expired tokens
 * - Tokens whose subject account has been deleted
 *
 * ## Internal errors
 *
 * Wrap failures of the collaborators (store backend, bcrypt, JWT signing).
 * These are logged server-side and mapped to an opaque 500 response.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::store::StoreError;

/// Errors produced by the authentication core
///
/// Each variant maps to exactly one HTTP status code via
/// [`AuthError::status_code`]; the user-facing message is chosen in the
/// `IntoResponse` conversion, not here, so internal variants can carry
/// diagnostic detail without leaking it.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request body was missing, malformed, or had empty required fields
    #[error("request validation failed")]
    Validation,

    /// An empty plaintext password was handed to the credential store
    #[error("empty plaintext credential")]
    InvalidCredential,

    /// Signup attempted with an email that is already registered
    #[error("account email already registered")]
    DuplicateAccount,

    /// Login failed: wrong password or unknown email
    ///
    /// The two causes are deliberately collapsed into one variant so no
    /// caller can distinguish them.
    #[error("email or password incorrect")]
    AuthenticationFailed,

    /// Bearer token was missing, malformed, tampered with, or expired
    #[error("invalid bearer token")]
    InvalidToken,

    /// Token verified but its subject no longer resolves to an account
    #[error("token subject does not exist")]
    UnknownSubject,

    /// Store backend failure (not a duplicate-key violation)
    #[error("store error: {0}")]
    Store(StoreError),

    /// Password hashing failure
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("token signing error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `InvalidCredential`, `DuplicateAccount` - 422
    /// - `AuthenticationFailed`, `InvalidToken`, `UnknownSubject` - 401
    /// - `Store`, `Hash`, `Token` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation | Self::InvalidCredential | Self::DuplicateAccount => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::AuthenticationFailed | Self::InvalidToken | Self::UnknownSubject => {
                StatusCode::UNAUTHORIZED
            }
            Self::Store(_) | Self::Hash(_) | Self::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AuthError {
    /// Map store errors into the auth taxonomy
    ///
    /// Duplicate-key violations become `DuplicateAccount`; a missing row on
    /// update becomes `UnknownSubject`; everything else is an internal
    /// store failure.
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::DuplicateAccount,
            StoreError::NotFound => Self::UnknownSubject,
            other => Self::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_errors_map_to_4xx() {
        assert_eq!(
            AuthError::Validation.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AuthError::InvalidCredential.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AuthError::DuplicateAccount.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AuthError::AuthenticationFailed.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::InvalidToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::UnknownSubject.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_duplicate_email_becomes_duplicate_account() {
        let err = AuthError::from(StoreError::DuplicateEmail);
        assert!(matches!(err, AuthError::DuplicateAccount));
    }

    #[test]
    fn test_missing_row_becomes_unknown_subject() {
        let err = AuthError::from(StoreError::NotFound);
        assert!(matches!(err, AuthError::UnknownSubject));
    }
}
