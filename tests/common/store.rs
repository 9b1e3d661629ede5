//! In-memory account store
//!
//! Implements the `UserStore` trait over a mutex-guarded map so the suite
//! exercises the full HTTP stack without a live PostgreSQL. Mirrors the
//! production backend's contract: email uniqueness with a distinguishable
//! duplicate error, credential projection only through
//! `credentials_by_email`, and partial updates that leave absent fields
//! untouched.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use gatehouse::auth::accounts::Account;
use gatehouse::auth::store::{AccountChanges, NewAccount, StoreError, UserStore};

struct StoredAccount {
    account: Account,
    password_hash: String,
}

/// Map-backed `UserStore` for tests
#[derive(Default)]
pub struct MemoryUserStore {
    accounts: Mutex<HashMap<Uuid, StoredAccount>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delete an account out from under its sessions
    ///
    /// Not part of the `UserStore` trait: account deletion is out of scope
    /// for the API, but the stale-token case needs a way to produce a
    /// valid token whose subject no longer exists.
    pub fn remove(&self, id: Uuid) {
        self.accounts.lock().unwrap().remove(&id);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.lock().unwrap();

        // The map lock plays the role of the unique constraint: the check
        // and the insert are one critical section.
        if accounts
            .values()
            .any(|stored| stored.account.email == account.email)
        {
            return Err(StoreError::DuplicateEmail);
        }

        let now = Utc::now();
        let created = Account {
            id: Uuid::new_v4(),
            name: account.name,
            email: account.email,
            created_at: now,
            updated_at: now,
        };

        accounts.insert(
            created.id,
            StoredAccount {
                account: created.clone(),
                password_hash: account.password_hash,
            },
        );

        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.get(&id).map(|stored| stored.account.clone()))
    }

    async fn credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(Account, String)>, StoreError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .values()
            .find(|stored| stored.account.email == email)
            .map(|stored| (stored.account.clone(), stored.password_hash.clone())))
    }

    async fn update(&self, id: Uuid, changes: AccountChanges) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.lock().unwrap();

        if let Some(new_email) = &changes.email {
            if accounts
                .values()
                .any(|stored| stored.account.id != id && &stored.account.email == new_email)
            {
                return Err(StoreError::DuplicateEmail);
            }
        }

        let stored = accounts.get_mut(&id).ok_or(StoreError::NotFound)?;

        if let Some(name) = changes.name {
            stored.account.name = name;
        }
        if let Some(email) = changes.email {
            stored.account.email = email;
        }
        if let Some(password_hash) = changes.password_hash {
            stored.password_hash = password_hash;
        }
        stored.account.updated_at = Utc::now();

        Ok(stored.account.clone())
    }
}
