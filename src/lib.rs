//! Gatehouse - Main Library
//!
//! Gatehouse is a minimal user authentication API built with Axum: account
//! signup, login, and current-user retrieval, with bcrypt password
//! credentials and JWT bearer sessions over PostgreSQL.
//!
//! # Overview
//!
//! The library provides:
//! - A credential store: plaintext passwords become salted bcrypt hashes,
//!   and login attempts are verified against them
//! - A session token issuer/verifier: HS256-signed JWTs binding a session
//!   to an account until expiry
//! - The HTTP layer that composes the two: three routes, a bearer-token
//!   extractor, and typed errors with fixed user-facing messages
//!
//! # Module Structure
//!
//! - **`auth`** - Credentials, tokens, accounts, persistence port, handlers
//! - **`middleware`** - Bearer-token authentication extractor
//! - **`routes`** - Router assembly and route table
//! - **`server`** - Configuration, state, and application wiring
//! - **`error`** - Error taxonomy and HTTP conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use gatehouse::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! All request handling is stateless between calls: `AppState` holds only
//! an `Arc`'d store and immutable token keys, so every route may run
//! concurrently without coordination. Email uniqueness under concurrent
//! signups is the store's constraint, not application locking.
//!
//! # Error Handling
//!
//! Fallible operations return `Result<_, AuthError>` and propagate with
//! `?`; the error's `IntoResponse` conversion maps each class to its
//! status code and fixed message. Nothing after startup is fatal to the
//! process.

/// Authentication: credentials, tokens, accounts, handlers
pub mod auth;

/// Error taxonomy and HTTP conversion
pub mod error;

/// Request-processing middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

// Re-export commonly used types
pub use auth::{Account, TokenKeys, UserStore};
pub use error::AuthError;
pub use routes::create_router;
pub use server::{AppState, ServerConfig};
