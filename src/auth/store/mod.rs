//! Account Store
//!
//! The persistence port for accounts. The authentication core never talks
//! to a database driver directly; it consumes this trait, and the concrete
//! backend is chosen at startup (PostgreSQL in production, an in-memory map
//! in the integration tests).
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs      - UserStore trait, StoreError, write payloads
//! └── postgres.rs - sqlx/PostgreSQL implementation
//! ```
//!
//! # Credential Projection
//!
//! The stored password hash is excluded from the default account
//! projection: every operation returns [`Account`] without a credential
//! field, except [`UserStore::credentials_by_email`], which is the single
//! explicitly-named way to read the hash out of the store.
//!
//! # Uniqueness
//!
//! Email uniqueness is the store's job, not the application's: concurrent
//! inserts with the same email must resolve to exactly one success and one
//! [`StoreError::DuplicateEmail`].

/// sqlx/PostgreSQL store implementation
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::accounts::Account;

pub use postgres::PgUserStore;

/// Errors surfaced by a store backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// Insert or update collided with the email uniqueness constraint
    #[error("an account with this email already exists")]
    DuplicateEmail,

    /// Update targeted an account id that does not exist
    #[error("no account with the given id")]
    NotFound,

    /// Any other backend failure
    #[error("store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Payload for creating an account
///
/// Carries the already-hashed credential; plaintext never reaches the
/// store.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Partial update for an account
///
/// Each field is `None` to leave the stored column untouched. In
/// particular, `password_hash: None` keeps the existing credential
/// byte-for-byte - the store never re-derives or rewrites a hash on its
/// own.
#[derive(Debug, Clone, Default)]
pub struct AccountChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

/// Persistence operations the authentication core consumes
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new account, enforcing email uniqueness
    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError>;

    /// Look up an account by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError>;

    /// Look up an account by email, explicitly requesting the stored hash
    ///
    /// Returns the account together with its password hash. This is the
    /// only operation that projects the credential.
    async fn credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(Account, String)>, StoreError>;

    /// Apply a partial update and return the updated account
    async fn update(&self, id: Uuid, changes: AccountChanges) -> Result<Account, StoreError>;
}
