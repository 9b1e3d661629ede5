//! Authentication Module
//!
//! This module owns the two components that authenticate a caller: the
//! credential store (password hashing and verification against persisted
//! accounts) and the session token issuer/verifier. The two are
//! independent; the HTTP handlers compose them.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── credentials.rs  - Password hashing and verification policy
//! ├── tokens.rs       - Session token issue/verify (JWT)
//! ├── accounts.rs     - Account model and core operations
//! ├── store/          - Persistence port and PostgreSQL backend
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - Account registration handler
//!     ├── login.rs    - Authentication handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: plaintext is hashed, the account inserted (store enforces
//!    email uniqueness), and a session token issued
//! 2. **Login**: credentials are resolved by email and verified against the
//!    stored hash, then a session token issued
//! 3. **Authenticated request**: the bearer token is verified and its
//!    subject resolved back to an account
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed at a fixed cost before storage; the
//!   plaintext never reaches the store
//! - The stored hash is excluded from the default account projection and
//!   from every response body
//! - Tokens are HS256-signed with a key loaded once at startup; they die
//!   by expiry or signature mismatch only (no revocation list)
//! - Failed logins never reveal whether the email or the password was wrong

/// Password hashing and verification policy
pub mod credentials;

/// Session token issue/verify
pub mod tokens;

/// Account model and core operations
pub mod accounts;

/// Persistence port and backends
pub mod store;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use accounts::{Account, AccountUpdate};
pub use handlers::{get_me, login, signup};
pub use handlers::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use store::{PgUserStore, UserStore};
pub use tokens::TokenKeys;
