/**
 * PostgreSQL Account Store
 *
 * sqlx-backed implementation of the `UserStore` trait.
 *
 * # Uniqueness Handling
 *
 * Duplicate emails are detected from the database's unique-violation
 * error, not from a read-before-write check: a pre-check would race under
 * concurrent signups, while the constraint guarantees exactly one winner.
 *
 * # Partial Updates
 *
 * `update` uses COALESCE per column, so an absent field leaves the stored
 * value untouched. This is what keeps an unchanged password hash
 * byte-identical across saves.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::accounts::Account;
use crate::auth::store::{AccountChanges, NewAccount, StoreError, UserStore};

/// Account store backed by a PostgreSQL connection pool
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape for the one query that projects the credential
#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

impl CredentialRow {
    fn split(self) -> (Account, String) {
        (
            Account {
                id: self.id,
                name: self.name,
                email: self.email,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            self.password_hash,
        )
    }
}

/// Map an sqlx error into the store taxonomy
fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateEmail,
        _ => StoreError::Backend(Box::new(err)),
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(Account, String)>, StoreError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(CredentialRow::split))
    }

    async fn update(&self, id: Uuid, changes: AccountChanges) -> Result<Account, StoreError> {
        let now = Utc::now();

        let updated = sqlx::query_as::<_, Account>(
            r#"
            UPDATE users
            SET name = COALESCE($1, name),
                email = COALESCE($2, email),
                password_hash = COALESCE($3, password_hash),
                updated_at = $4
            WHERE id = $5
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(&changes.password_hash)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        updated.ok_or(StoreError::NotFound)
    }
}
