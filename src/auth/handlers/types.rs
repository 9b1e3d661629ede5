/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. These types are shared across the signup,
 * login, and get_me handlers.
 */

use serde::{Deserialize, Serialize};

use crate::auth::accounts::Account;
use crate::error::AuthError;

/// Sign up request
///
/// Contains the name, email and password for account registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
}

impl SignupRequest {
    /// Check that all required fields are present and non-empty
    ///
    /// A field that deserialized but is empty counts as missing; the email
    /// must at least look like one.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::Validation);
        }
        if !self.email.contains('@') {
            return Err(AuthError::Validation);
        }
        Ok(())
    }
}

/// Login request
///
/// Contains the email and password for authentication.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plaintext password (verified against the stored hash)
    pub password: String,
}

impl LoginRequest {
    /// Check that both fields are present and non-empty
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::Validation);
        }
        Ok(())
    }
}

/// Auth response
///
/// Returned by the signup and login handlers: the session token plus the
/// account it binds to.
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    /// Account information (no credential)
    pub user: UserResponse,
    /// Bearer token for the new session
    pub token: String,
}

/// Account response body
///
/// The only account shape that crosses the HTTP boundary. Built from
/// [`Account`], which itself has no credential field, so no handler can
/// accidentally serialize a password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// Account ID (UUID) as a string
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Created at timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Updated at timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Account> for UserResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            name: account.name,
            email: account.email,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
