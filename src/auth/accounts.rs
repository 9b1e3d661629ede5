/**
 * Account Model and Core Operations
 *
 * This module defines the account type and the operations that glue the
 * credential policy to the persistence port: create, authenticate, update,
 * and current-user lookup.
 *
 * # Credential Invariants
 *
 * `Account` carries no credential field, so the password hash cannot leak
 * through any serialization of an account. Plaintext passwords exist only
 * as borrowed parameters on their way into `credentials::hash_password`.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::credentials;
use crate::auth::store::{AccountChanges, NewAccount, UserStore};
use crate::error::AuthError;

/// Account struct representing a registered user
///
/// The default projection: everything about an account except its
/// credential. The stored hash is only reachable through
/// `UserStore::credentials_by_email`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique across all accounts)
    pub email: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Partial account update with plaintext password
///
/// The `Option`-ness of each field is the dirty flag: only fields that are
/// `Some` are written, and in particular the password is re-hashed only
/// when a new plaintext is actually supplied. Passing the update through
/// unchanged on every save would re-hash an already-hashed value and
/// silently corrupt the credential.
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Create an account from signup input
///
/// Hashes the plaintext and inserts. Duplicate emails surface as
/// `AuthError::DuplicateAccount` from the store's uniqueness constraint -
/// there is no read-before-write check, so concurrent signups race to the
/// constraint and exactly one wins.
///
/// # Errors
///
/// * `AuthError::InvalidCredential` - empty password
/// * `AuthError::DuplicateAccount` - email already registered
pub async fn create_account(
    store: &dyn UserStore,
    name: String,
    email: String,
    password: &str,
) -> Result<Account, AuthError> {
    let password_hash = credentials::hash_password(password)?;
    let account = store
        .insert(NewAccount {
            name,
            email,
            password_hash,
        })
        .await?;
    Ok(account)
}

/// Verify login credentials and return the matching account
///
/// Unknown email and wrong password both produce
/// `AuthError::AuthenticationFailed`; the caller cannot tell which check
/// failed.
pub async fn authenticate(
    store: &dyn UserStore,
    email: &str,
    password: &str,
) -> Result<Account, AuthError> {
    let Some((account, stored_hash)) = store.credentials_by_email(email).await? else {
        return Err(AuthError::AuthenticationFailed);
    };

    if !credentials::verify_password(password, Some(stored_hash.as_str())) {
        return Err(AuthError::AuthenticationFailed);
    }

    Ok(account)
}

/// Apply a partial update to an account
///
/// Re-hashes only when the update carries a new plaintext password; an
/// update without one leaves the stored hash byte-for-byte unchanged.
pub async fn update_account(
    store: &dyn UserStore,
    id: Uuid,
    update: AccountUpdate,
) -> Result<Account, AuthError> {
    let password_hash = match update.password.as_deref() {
        Some(plaintext) => Some(credentials::hash_password(plaintext)?),
        None => None,
    };

    let account = store
        .update(
            id,
            AccountChanges {
                name: update.name,
                email: update.email,
                password_hash,
            },
        )
        .await?;
    Ok(account)
}

/// Resolve a verified token subject to its account
///
/// # Errors
///
/// * `AuthError::UnknownSubject` - the token was valid but its account no
///   longer exists (stale or deleted subject)
pub async fn current_user(store: &dyn UserStore, id: Uuid) -> Result<Account, AuthError> {
    store
        .find_by_id(id)
        .await?
        .ok_or(AuthError::UnknownSubject)
}
