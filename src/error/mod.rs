//! Error Module
//!
//! This module defines the error taxonomy for the authentication core and
//! its translation into HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions
//! - **`conversion`** - Error conversion implementations (IntoResponse)
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Taxonomy
//!
//! Every failure the core can produce is a variant of [`AuthError`]:
//!
//! - `Validation` - request body missing or with empty fields
//! - `InvalidCredential` - empty plaintext handed to the credential store
//! - `DuplicateAccount` - signup with an email that is already registered
//! - `AuthenticationFailed` - wrong password or unknown email (deliberately
//!   indistinguishable from each other)
//! - `InvalidToken` - malformed, tampered, or expired bearer token
//! - `UnknownSubject` - valid token whose account no longer exists
//! - `Store` / `Hash` / `Token` - internal failures, never shown to callers
//!
//! # HTTP Response Conversion
//!
//! `AuthError` implements `IntoResponse`, so handlers return
//! `Result<_, AuthError>` and propagate with `?`. The conversion collapses
//! internal distinctions into a fixed user-facing message per status code to
//! avoid leaking which part of a login failed.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AuthError;
